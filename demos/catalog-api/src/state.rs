/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async Nutriscan SDK instance. Owns the immutable catalog and the
    /// pending-scan guard shared by every request.
    pub sdk: nutriscan_sdk::AsyncNutriscanSdk,
}
