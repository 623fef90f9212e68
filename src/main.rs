use product_inventory_api::{config, handler, http, store};

use lambda_http::{Error, run, service_fn, tracing};

async fn function_handler(
    store: &store::ProductStore,
    event: lambda_http::Request,
) -> Result<lambda_http::Response<lambda_http::Body>, Error> {
    let request = http::request::Request::from(&event);
    let response = handler::handle(store, request).await;
    Ok(response.try_into()?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = config::Config::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = store::ProductStore::new(client, config.table_name);

    run(service_fn(|event| function_handler(&store, event))).await
}
