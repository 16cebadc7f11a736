//! crates/chromalog/src/config.rs
//! Logger configuration and the partial-update merge.

use chromalog_core::{AnsiSheet, AnsiSheetUpdate, StyleSheet, StyleSheetUpdate};

use crate::runtime::Runtime;
use crate::transport::TransportChoice;

/// Complete configuration owned by a [`Logger`](crate::Logger).
///
/// Each logger instance owns one of these behind a lock; there is no
/// process-global configuration. Children created through
/// [`Logger::namespace`](crate::Logger::namespace) receive an owned
/// snapshot at creation time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Master switch; when false every level method is a silent no-op.
    pub enabled: bool,
    /// Whether any visual styling is applied at all.
    pub styled: bool,
    /// CSS declarations per level, for CSS-rendering transports.
    pub styles: StyleSheet,
    /// ANSI escape pairs per level, for ANSI-rendering transports.
    pub node_styles: AnsiSheet,
    /// Optional prefix label inserted before the level tag.
    pub namespace: Option<String>,
    /// Forced or auto-detected rendering backend.
    pub transport: TransportChoice,
}

impl Default for Config {
    /// Enabled and styled, light palette, default ANSI palette, no
    /// namespace, automatic transport.
    fn default() -> Self {
        Self {
            enabled: true,
            styled: true,
            styles: StyleSheet::light(),
            node_styles: AnsiSheet::palette(),
            namespace: None,
            transport: TransportChoice::Auto,
        }
    }
}

impl Config {
    /// Computes the startup configuration from an environment probe:
    /// palette from the color-scheme preference, styling from the host's
    /// styling verdict. Everything else matches [`Config::default`].
    #[must_use]
    pub fn detected(runtime: &dyn Runtime) -> Self {
        Self {
            styled: runtime.supports_style(),
            styles: if runtime.prefers_dark() {
                StyleSheet::dark()
            } else {
                StyleSheet::light()
            },
            ..Self::default()
        }
    }

    /// Merges a partial update into this configuration.
    ///
    /// Scalar fields present in the update overwrite the current value;
    /// absent fields are untouched. The two style sheets merge key by
    /// key, so an update naming one level's style leaves the other
    /// levels' styles as they were. There are no error conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog::{Config, ConfigUpdate};
    /// use chromalog_core::StyleSheetUpdate;
    ///
    /// let mut config = Config::default();
    /// let before_error = config.styles.error.clone();
    ///
    /// config.apply(ConfigUpdate {
    ///     styled: Some(false),
    ///     styles: Some(StyleSheetUpdate {
    ///         success: Some("color: purple;".to_owned()),
    ///         ..StyleSheetUpdate::default()
    ///     }),
    ///     ..ConfigUpdate::default()
    /// });
    ///
    /// assert!(!config.styled);
    /// assert!(config.enabled);
    /// assert_eq!(config.styles.success, "color: purple;");
    /// assert_eq!(config.styles.error, before_error);
    /// ```
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(styled) = update.styled {
            self.styled = styled;
        }
        if let Some(styles) = update.styles {
            styles.apply_to(&mut self.styles);
        }
        if let Some(node_styles) = update.node_styles {
            node_styles.apply_to(&mut self.node_styles);
        }
        if let Some(namespace) = update.namespace {
            self.namespace = Some(namespace);
        }
        if let Some(transport) = update.transport {
            self.transport = transport;
        }
    }
}

/// Partial [`Config`] update accepted by
/// [`Logger::configure`](crate::Logger::configure).
///
/// Every field is optional. Under the `serde` feature the type
/// deserializes from partial JSON objects, so applications can drive
/// configuration from parameters or files the way the browser original
/// drove it from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigUpdate {
    /// Replacement for the master switch.
    pub enabled: Option<bool>,
    /// Replacement for the styling toggle.
    pub styled: Option<bool>,
    /// Partial CSS sheet update, merged key by key.
    pub styles: Option<StyleSheetUpdate>,
    /// Partial ANSI sheet update, merged key by key.
    pub node_styles: Option<AnsiSheetUpdate>,
    /// Replacement namespace prefix.
    pub namespace: Option<String>,
    /// Replacement transport choice.
    pub transport: Option<TransportChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::StaticRuntime;
    use crate::transport::Transport;
    use chromalog_core::{AnsiPair, Level};

    #[test]
    fn empty_update_changes_nothing() {
        let mut config = Config::default();
        config.apply(ConfigUpdate::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn scalar_fields_overwrite_only_when_present() {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            enabled: Some(false),
            ..ConfigUpdate::default()
        });

        assert!(!config.enabled);
        assert!(config.styled);
        assert_eq!(config.transport, TransportChoice::Auto);
    }

    #[test]
    fn style_sheet_merge_preserves_unnamed_levels() {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            styles: Some(StyleSheetUpdate {
                success: Some("color: purple;".to_owned()),
                ..StyleSheetUpdate::default()
            }),
            ..ConfigUpdate::default()
        });

        assert_eq!(config.styles.success, "color: purple;");
        assert_eq!(config.styles.error, StyleSheet::light().error);
        assert_eq!(config.styles.warning, StyleSheet::light().warning);
        assert_eq!(config.styles.info, StyleSheet::light().info);
    }

    #[test]
    fn ansi_sheet_merge_preserves_unnamed_levels() {
        let mut config = Config::default();
        let mut update = AnsiSheetUpdate::default();
        update.set(Level::Error, AnsiPair::from_static("\x1b[41m", "\x1b[0m"));
        config.apply(ConfigUpdate {
            node_styles: Some(update),
            ..ConfigUpdate::default()
        });

        assert_eq!(config.node_styles.error.open(), "\x1b[41m");
        assert_eq!(config.node_styles.success, AnsiSheet::palette().success);
    }

    #[test]
    fn namespace_and_transport_updates_apply() {
        let mut config = Config::default();
        config.apply(ConfigUpdate {
            namespace: Some("api".to_owned()),
            transport: Some(TransportChoice::Browser),
            ..ConfigUpdate::default()
        });

        assert_eq!(config.namespace.as_deref(), Some("api"));
        assert_eq!(config.transport, TransportChoice::Browser);
    }

    #[test]
    fn detected_config_follows_the_probe() {
        let dark = Config::detected(&StaticRuntime::new(Transport::Node).with_dark(true));
        assert_eq!(dark.styles, StyleSheet::dark());
        assert!(dark.styled);

        let plain = Config::detected(&StaticRuntime::new(Transport::Node).with_style(false));
        assert_eq!(plain.styles, StyleSheet::light());
        assert!(!plain.styled);
        assert!(plain.enabled);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn partial_update_deserializes_from_sparse_json() {
            let update: ConfigUpdate = serde_json::from_str(
                r#"{"styled": false, "styles": {"info": "color: teal;"}}"#,
            )
            .unwrap();

            assert_eq!(update.styled, Some(false));
            assert_eq!(update.enabled, None);
            let styles = update.styles.unwrap();
            assert_eq!(styles.info.as_deref(), Some("color: teal;"));
            assert_eq!(styles.success, None);
        }

        #[test]
        fn config_round_trips() {
            let mut config = Config::default();
            config.namespace = Some("worker".to_owned());
            config.transport = TransportChoice::ReactNative;

            let json = serde_json::to_string(&config).unwrap();
            let decoded: Config = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }
    }
}
