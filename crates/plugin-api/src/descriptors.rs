/// Static metadata advertised by a style plugin.
#[derive(Debug)]
pub struct StylePluginDescriptor {
    /// Identifier used to reference the plugin from a configuration.
    pub id: &'static str,
    /// Short human readable description of the contributed rules.
    pub about: &'static str,
}
