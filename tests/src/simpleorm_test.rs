use crate::Setup;

/// Runs one test on its own current-thread runtime and drops the test's
/// tables once it finishes, even if it panicked.
pub struct SimpleOrmTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Option<std::sync::Arc<S>>,
}

impl<S: Setup> SimpleOrmTest<S> {
    pub fn new(setup: S) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Some(std::sync::Arc::new(setup)),
        }
    }

    /// Run a test function with the setup, using our managed runtime.
    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(std::sync::Arc<S>) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let setup = self.setup.clone().expect("Setup already consumed");
        self.runtime.block_on(async {
            test_fn(setup).await;
        });
    }
}

impl<S: Setup> Drop for SimpleOrmTest<S> {
    fn drop(&mut self) {
        if let Some(setup) = self.setup.take() {
            self.runtime.block_on(async {
                let _ = setup.cleanup_my_tables().await;
            });
        }
    }
}
