// region:    --- Imports
use rewear_catalog::config::Config;
use rewear_catalog::handlers;
use rewear_catalog::state::AppState;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = Config::load();

    // 상태 생성 (상품 컬렉션, 프로필 저장소)
    let state = match AppState::from_config(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("{:<12} --> 상태 초기화 실패: {:?}", "Main", e);
            return Err(e.into());
        }
    };
    info!("{:<12} --> 상태 초기화 성공", "Main");

    // 라우터 설정
    let routes_all = handlers::router(state);

    // 리스너 생성 (기본 0.0.0.0:3000)
    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
