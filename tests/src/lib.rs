
mod isolation;
mod simpleorm_test;

pub use logging_driver::{DriverOp, LoggingDriver, OpsLog};

// Re-export for use in macros
pub use simpleorm_test::SimpleOrmTest;

use simpleorm::Db;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connects, then drops and recreates every registered table.
    async fn setup(&self, builder: simpleorm::db::Builder) -> Db {
        let db = self.connect(builder).await.unwrap();
        db.reset_db().await.unwrap();
        self.ops().clear();
        db
    }

    /// Connects without touching any table. Every driver operation issued
    /// through the returned handle is recorded in [`Setup::ops`].
    async fn connect(&self, builder: simpleorm::db::Builder) -> simpleorm::Result<Db>;

    fn ops(&self) -> &OpsLog;

    /// Drops the tables created by this setup instance.
    async fn cleanup_my_tables(&self) -> simpleorm::Result<()>;
}

#[async_trait::async_trait]
impl<S: Setup> Setup for std::sync::Arc<S> {
    async fn setup(&self, builder: simpleorm::db::Builder) -> Db {
        (**self).setup(builder).await
    }

    async fn connect(&self, builder: simpleorm::db::Builder) -> simpleorm::Result<Db> {
        (**self).connect(builder).await
    }

    fn ops(&self) -> &OpsLog {
        (**self).ops()
    }

    async fn cleanup_my_tables(&self) -> simpleorm::Result<()> {
        (**self).cleanup_my_tables().await
    }
}
