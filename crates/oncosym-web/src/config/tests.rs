#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_match_model_defaults() {
        let settings = ModelConfig::default().settings();
        let expected = ModelSettings::default();
        assert_eq!(settings.num_samples, expected.num_samples);
        assert_eq!(settings.seed, expected.seed);
        assert_eq!(settings.training.epochs, expected.training.epochs);
        assert_eq!(settings.artifact_dir, expected.artifact_dir);
        assert!(!settings.retrain);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9100

            [model]
            seed = 7
            retrain = true
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.model.seed, 7);
        assert!(config.model.retrain);
        assert_eq!(config.model.num_samples, 1000);
        assert_eq!(config.logging.filter, "oncosym=debug,info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, default_port());
        assert_eq!(config.model.artifact_dir, default_artifact_dir());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (config, source) = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(source, ConfigSource::Defaults(path));
    }

    #[test]
    fn test_existing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oncosym.toml");
        std::fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();
        let (config, source) = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_missing_file_warning_reaches_subscriber() {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Capture {
            type Writer = Capture;
            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let (_, source) = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || source.log());

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("absent.toml"), "{logged}");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oncosym.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
