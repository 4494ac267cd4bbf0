//! ExchangeCurrencyUseCase unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use exchange_types::{
        Exception, ExceptionKind, ExchangeCurrencyInput, ExchangeCurrencyOutput, ExchangeError,
        ExchangeService,
    };

    use crate::ExchangeCurrencyUseCase;

    /// What the mock rate service does when asked.
    #[derive(Clone)]
    pub enum Script {
        Rate(f64),
        Reject(Exception),
        Fault(String),
        Panic,
    }

    /// Rate service that replays a fixed outcome and records its inputs.
    pub struct MockService {
        script: Script,
        calls: Mutex<Vec<ExchangeCurrencyInput>>,
    }

    impl MockService {
        pub fn new(script: Script) -> Self {
            Self {
                script,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<ExchangeCurrencyInput> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExchangeService for MockService {
        async fn get_exchange_rate(
            &self,
            input: &ExchangeCurrencyInput,
        ) -> Result<f64, ExchangeError> {
            self.calls.lock().unwrap().push(input.clone());
            match &self.script {
                Script::Rate(rate) => Ok(*rate),
                Script::Reject(e) => Err(ExchangeError::Rejected(e.clone())),
                Script::Fault(reason) => Err(ExchangeError::Fault(reason.clone())),
                Script::Panic => panic!("rate service blew up"),
            }
        }
    }

    fn use_case(script: Script) -> ExchangeCurrencyUseCase<MockService> {
        ExchangeCurrencyUseCase::new(MockService::new(script))
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let use_case = use_case(Script::Rate(0.9));

        let output = use_case
            .run(ExchangeCurrencyInput::new("USD", "EUR", 100.0))
            .await
            .unwrap();

        assert_eq!(output.exchange_rate, 0.9);
        assert_eq!(output.exchange_result, 90.0);
    }

    #[tokio::test]
    async fn test_result_is_rate_times_amount() {
        for (rate, amount) in [(1.0, 0.0), (83.12, 2.5), (0.0067, 1_000_000.0), (1.266, 0.01)] {
            let use_case = use_case(Script::Rate(rate));

            let output = use_case
                .run(ExchangeCurrencyInput::new("GBP", "USD", amount))
                .await
                .unwrap();

            assert_eq!(output.exchange_rate, rate);
            assert_eq!(output.exchange_result, rate * amount);
        }
    }

    #[tokio::test]
    async fn test_input_is_passed_to_service_once() {
        let use_case = use_case(Script::Rate(1.1));
        let input = ExchangeCurrencyInput::new("EUR", "USD", 10.0);

        use_case.run(input.clone()).await.unwrap();

        assert_eq!(use_case.service().calls(), vec![input]);
    }

    #[tokio::test]
    async fn test_unsupported_code_is_translated() {
        let use_case = use_case(Script::Reject(Exception::new(
            ExceptionKind::UnsupportedCode,
            "Unsupported currency: XXX",
        )));

        let err = use_case
            .run(ExchangeCurrencyInput::new("XXX", "EUR", 50.0))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Exception::new(
                "unsupported-currency-code",
                "The Base or Target currency code is not supported"
            )
        );
    }

    #[tokio::test]
    async fn test_other_rejections_collapse_to_internal_server_error() {
        for kind in ["quota-reached", "invalid-key", "malformed-request", "http-503"] {
            let use_case = use_case(Script::Reject(Exception::new(kind, "detail to discard")));

            let err = use_case
                .run(ExchangeCurrencyInput::new("USD", "EUR", 1.0))
                .await
                .unwrap_err();

            assert_eq!(err.kind, ExceptionKind::InternalServerError);
            assert_eq!(err.message, "Something unexpected happened");
        }
    }

    #[tokio::test]
    async fn test_fault_is_internal_error() {
        let use_case = use_case(Script::Fault("connection reset".into()));

        let err = use_case
            .run(ExchangeCurrencyInput::new("USD", "EUR", 1.0))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ExceptionKind::InternalError);
        assert_eq!(err.message, "Something went wrong");
    }

    #[tokio::test]
    async fn test_panic_in_service_is_internal_error() {
        let use_case = use_case(Script::Panic);

        let err = use_case
            .run(ExchangeCurrencyInput::new("USD", "EUR", 1.0))
            .await
            .unwrap_err();

        assert_eq!(err, Exception::internal_error());
    }

    #[tokio::test]
    async fn test_use_case_still_serves_after_panic() {
        let use_case = use_case(Script::Panic);
        let input = ExchangeCurrencyInput::new("USD", "EUR", 1.0);

        assert!(use_case.run(input.clone()).await.is_err());
        assert!(use_case.run(input).await.is_err());
        assert_eq!(use_case.service().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let use_case = use_case(Script::Rate(0.9));
        let input = ExchangeCurrencyInput::new("USD", "EUR", 100.0);

        let first = use_case.run(input.clone()).await;
        let second = use_case.run(input).await;

        assert_eq!(first, second);
        assert_eq!(
            first,
            Ok(ExchangeCurrencyOutput {
                exchange_rate: 0.9,
                exchange_result: 90.0,
            })
        );
    }

    #[tokio::test]
    async fn test_overflowing_result_is_internal_error() {
        let use_case = use_case(Script::Rate(149.25));

        let err = use_case
            .run(ExchangeCurrencyInput::new("USD", "JPY", 1e307))
            .await
            .unwrap_err();

        assert_eq!(err, Exception::internal_error());
    }

    #[tokio::test]
    async fn test_nan_rate_is_internal_error() {
        let use_case = use_case(Script::Rate(f64::NAN));

        let err = use_case
            .run(ExchangeCurrencyInput::new("USD", "EUR", 1.0))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ExceptionKind::InternalError);
    }
}
