use cfgattr_application::services::{AttributeHandlerChain, DnsAttributeHandler};
use cfgattr_application::use_cases::{
    ApplyConfigurationUseCase, BuildConfigurationRequestUseCase,
};
use cfgattr_domain::AttributeType;
use cfgattr_infrastructure::tunnel::{ResolvConfWriter, ResolverSettingsBuilder};
use cfgattr_infrastructure::wire::{encode_request, ConfigType, ConfigurationPayload};
use std::net::IpAddr;
use std::sync::Arc;

struct Session {
    builder: Arc<ResolverSettingsBuilder>,
    apply: ApplyConfigurationUseCase,
    build_request: BuildConfigurationRequestUseCase,
}

fn new_session() -> Session {
    let builder = Arc::new(ResolverSettingsBuilder::new());
    let chain = Arc::new(
        AttributeHandlerChain::new()
            .with_handler(Arc::new(DnsAttributeHandler::new(builder.clone()))),
    );
    Session {
        builder,
        apply: ApplyConfigurationUseCase::new(chain.clone()),
        build_request: BuildConfigurationRequestUseCase::new(chain),
    }
}

fn attribute(buf: &mut Vec<u8>, code: u16, value: &[u8]) {
    buf.extend_from_slice(&code.to_be_bytes());
    buf.extend_from_slice(&(value.len() as u16).to_be_bytes());
    buf.extend_from_slice(value);
}

fn gateway_reply() -> Vec<u8> {
    let v6: std::net::Ipv6Addr = "2001:db8:53::1".parse().unwrap();

    let mut buf = vec![0x02, 0, 0, 0];
    attribute(&mut buf, 1, &[10, 8, 0, 2]); // INTERNAL_IP4_ADDRESS
    attribute(&mut buf, 3, &[10, 8, 0, 1]); // INTERNAL_IP4_DNS
    attribute(&mut buf, 3, &[0, 0, 0, 0]); // degenerate
    attribute(&mut buf, 10, &v6.octets()); // INTERNAL_IP6_DNS
    attribute(&mut buf, 28674, b"corp.example"); // UNITY_DEF_DOMAIN
    attribute(&mut buf, 28674, b""); // empty domain
    attribute(&mut buf, 28672, b"Authorized use only"); // UNITY_BANNER
    buf
}

#[test]
fn test_request_payload_on_the_wire() {
    let session = new_session();
    let vips: Vec<IpAddr> = vec!["10.8.0.2".parse().unwrap()];

    let body = encode_request(&session.build_request.execute(&vips)).unwrap();

    assert_eq!(
        body.as_ref(),
        &[0x01, 0, 0, 0, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00]
    );

    let parsed = ConfigurationPayload::decode(&body).unwrap();
    assert_eq!(parsed.config_type, ConfigType::Request);
    let types: Vec<AttributeType> = parsed.attributes.iter().map(|a| a.attribute_type).collect();
    assert_eq!(
        types,
        vec![AttributeType::InternalIp4Dns, AttributeType::InternalIp6Dns]
    );
}

#[tokio::test]
async fn test_reply_applied_to_resolv_conf() {
    let session = new_session();
    let reply = gateway_reply();

    let payload = ConfigurationPayload::decode(&reply).unwrap();
    assert!(payload.config_type.carries_configuration());

    let report = session.apply.execute(&payload.attributes);
    assert_eq!(report.accepted, 3);
    assert_eq!(report.rejected, 2);
    assert_eq!(
        report.unhandled_types,
        vec![AttributeType::InternalIp4Address, AttributeType::UnityBanner]
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    let writer = ResolvConfWriter::new(&path, "vpn");
    writer.write(&session.builder.snapshot()).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# vpn\nsearch corp.example\nnameserver 10.8.0.1\nnameserver 2001:db8:53::1\n"
    );
}

#[test]
fn test_repeated_reply_does_not_duplicate_settings() {
    let session = new_session();
    let reply = gateway_reply();
    let payload = ConfigurationPayload::decode(&reply).unwrap();

    session.apply.execute(&payload.attributes);
    session.apply.execute(&payload.attributes);

    let settings = session.builder.snapshot();
    assert_eq!(settings.nameservers.len(), 2);
    assert_eq!(settings.search_domains.len(), 1);
}

#[test]
fn test_truncated_reply_is_refused_before_any_handler_runs() {
    let session = new_session();
    let mut reply = gateway_reply();
    reply.truncate(reply.len() - 3);

    assert!(ConfigurationPayload::decode(&reply).is_err());
    assert!(session.builder.snapshot().is_empty());
}
