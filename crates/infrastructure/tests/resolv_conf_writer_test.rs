use cfgattr_domain::config::OutputConfig;
use cfgattr_infrastructure::tunnel::{ResolvConfWriter, ResolverSettings};

fn sample_settings() -> ResolverSettings {
    ResolverSettings {
        nameservers: vec!["10.8.0.1".parse().unwrap(), "fd00::53".parse().unwrap()],
        search_domains: vec!["corp.example".to_string()],
    }
}

#[tokio::test]
async fn test_write_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    let writer = ResolvConfWriter::new(&path, "test header");

    writer.write(&sample_settings()).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "# test header\nsearch corp.example\nnameserver 10.8.0.1\nnameserver fd00::53\n"
    );
    assert!(!dir.path().join("resolv.conf.tmp").exists());
}

#[tokio::test]
async fn test_write_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run").join("cfgattr").join("resolv.conf");
    let writer = ResolvConfWriter::new(&path, "");

    writer.write(&sample_settings()).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    std::fs::write(&path, "nameserver 192.0.2.99\n").unwrap();
    let writer = ResolvConfWriter::new(&path, "");

    writer.write(&sample_settings()).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("192.0.2.99"));
    assert!(content.contains("nameserver 10.8.0.1"));
}

#[test]
fn test_from_config() {
    let config = OutputConfig {
        resolv_conf_path: "/tmp/cfgattr-test/resolv.conf".to_string(),
        header: "managed".to_string(),
    };
    let writer = ResolvConfWriter::from_config(&config);

    assert_eq!(
        writer.path(),
        std::path::Path::new("/tmp/cfgattr-test/resolv.conf")
    );
    assert!(writer.render(&ResolverSettings::default()).starts_with("# managed\n"));
}

#[tokio::test]
async fn test_failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "").unwrap();
    let writer = ResolvConfWriter::new(&path, "");

    assert!(writer.write(&sample_settings()).await.is_err());

    assert!(path.is_dir());
    assert!(!dir.path().join("resolv.conf.tmp").exists());
}
