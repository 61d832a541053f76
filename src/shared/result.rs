/// Crate-wide Result alias. Typed failures are `MatrixError` values carried
/// inside `anyhow::Error` so callers can downcast when they need the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
