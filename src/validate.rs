use crate::{
    options::{Descriptor, Kind},
    Error, Options, Result,
};

impl Options {
    /// Required string and integer options whose value is empty, in
    /// declaration order. Booleans are never missing.
    ///
    /// Emptiness is lexical: an integer always has a non-empty string form,
    /// so a required integer is never reported, even if it kept its default.
    pub fn missing(&self) -> Vec<&Descriptor> {
        self.descriptors()
            .iter()
            .filter(|it| it.is_required() && it.kind() != Kind::Boolean)
            .filter(|it| it.binding().lexical().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        let options = missing
            .iter()
            .map(|it| format!("--{} <{}>", it.long(), it.value_name()))
            .collect::<Vec<_>>();
        tracing::debug!(?options, "required options not provided");
        Err(Error::MissingRequired { options })
    }
}
