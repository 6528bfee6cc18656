#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} not configured")]
    NotConfigured(&'static str),
}
