use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;

pub struct CacheConnectorRedis {
    pub(crate) client: redis::Client,
    pub(crate) connection: Mutex<Option<MultiplexedConnection>>,
    pub(crate) address: String,
}
