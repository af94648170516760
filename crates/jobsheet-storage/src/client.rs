use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config chain (env vars, profile,
/// instance role). Region comes from the chain; `AWS_REGION` wins.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
