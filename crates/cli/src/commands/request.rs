use crate::di::Services;
use cfgattr_infrastructure::wire::encode_request;
use std::net::IpAddr;
use tracing::info;

pub fn run(services: &Services, vips: &[IpAddr]) -> anyhow::Result<()> {
    let requests = services.build_request.execute(vips);

    for request in &requests {
        info!(attribute = %request.attribute_type, "Requesting attribute");
    }

    let body = encode_request(&requests)?;
    println!("{}", hex::encode(&body));
    Ok(())
}
