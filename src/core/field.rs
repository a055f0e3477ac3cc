/// Draft value behind a single form input. The initial value is captured at
/// creation; `reset` always restores exactly that.
#[derive(Debug, Clone, Default)]
pub struct FormField {
    value: String,
    initial: String,
}

impl FormField {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            value: initial.clone(),
            initial,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value verbatim. No validation happens here; constraints
    /// belong to the consuming form control.
    pub fn set_from_input(&mut self, raw: &str) {
        self.value = raw.to_string();
    }

    pub fn reset(&mut self) {
        self.value = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_initial_value() {
        let mut field = FormField::new("Nord 1");
        field.set_from_input("Süd 2");
        field.set_from_input("Ost 3");
        field.reset();
        assert_eq!(field.value(), "Nord 1");
        field.reset();
        assert_eq!(field.value(), "Nord 1");
    }

    #[test]
    fn test_default_is_empty() {
        let mut field = FormField::default();
        field.set_from_input("draft");
        field.reset();
        assert_eq!(field.value(), "");
    }
}
