use cart_service::{AppState, construct_app_state, infra::get_config_settings, start_server};

use sqlx::postgres::PgConnectOptions;
use tokio::task::JoinHandle;

pub async fn start_test_server(
    connect_options: PgConnectOptions,
) -> (JoinHandle<Result<(), anyhow::Error>>, AppState) {
    let mut settings = get_config_settings().expect("Could not read application configuration.");
    settings.database.database_name = connect_options
        .get_database()
        .expect("Expected database name.")
        .into();
    let app_state = construct_app_state(settings)
        .await
        .expect("Expected AppState to be created.");
    let server_handle = tokio::task::spawn(start_server(app_state.clone()));

    // Wait until the spawned server is actually accepting connections so
    // tests don't race the bind and fail with "connection refused".
    let address = app_state.settings.application.address();
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(&address).await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    (server_handle, app_state)
}
