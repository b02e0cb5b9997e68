use finjudge_core::Config;

pub struct AppState {
    pub config: Config,
}
