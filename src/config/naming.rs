use crate::case::Style;
use crate::utils::ident::sanitize_identifier;

impl super::NamingConfig {
    pub fn type_case(&self) -> Style {
        self.type_case.unwrap_or(Style::Pascal)
    }

    pub fn field_case(&self) -> Style {
        self.field_case.unwrap_or(Style::Snake)
    }

    /// Name for a type or enum variant, decorated with the configured prefix
    /// and suffix.
    pub fn type_name(&self, name: &str) -> String {
        let mut result = self.type_case().apply(name);

        // Decorations are applied after conversion and keep their own case
        if let Some(prefix) = &self.type_prefix {
            result = format!("{}{}", prefix, result);
        }

        if let Some(suffix) = &self.type_suffix {
            result = format!("{}{}", result, suffix);
        }

        sanitize_identifier(&result)
    }

    /// Name for a struct field or function.
    pub fn field_name(&self, name: &str) -> String {
        let result = self.field_case().apply(name);
        sanitize_identifier(&result)
    }
}
