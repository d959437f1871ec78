//! `tracing` 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 환경 변수를 따르는 fmt 구독자를 설치한다.
///
/// 이미 전역 구독자가 있으면 아무것도 하지 않고 `false`를 돌려준다.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
