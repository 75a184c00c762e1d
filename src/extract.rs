//! Method signature extraction.
//!
//! Signatures are cut out of the original file text using the byte offsets
//! tree-sitter recorded for the parameter and result lists. Nothing is
//! re-printed from the tree, so spacing, comments and `...` survive as written.

use crate::error::{GenError, GenResult};
use crate::loader::{SourceUnit, Span};
use crate::parsing::go::{FunctionDecl, ScanResult, receiver_type_node, resolve_receiver_type};
use std::fmt;

/// A method declaration tied to the name of its receiver type.
///
/// Holds spans, not strings. The spans can only be read back through the
/// unit the binding was created from.
#[derive(Debug, Clone)]
pub struct ReceiverBinding<'u> {
    unit: &'u SourceUnit,
    name: String,
    receiver_type: String,
    parameters: Option<Span>,
    result: Option<Span>,
}

impl<'u> ReceiverBinding<'u> {
    /// Bind a function declaration to its receiver type.
    ///
    /// Free functions yield `Ok(None)`. Receivers that do not reduce to a
    /// type name yield [`GenError::ReceiverTypeUnresolved`]. Spans are read
    /// back through the unit the declaration was scanned from.
    pub fn from_function(func: &FunctionDecl<'u>) -> GenResult<Option<Self>> {
        let unit = func.unit;
        let Some(receiver) = func.receiver else {
            return Ok(None);
        };
        let type_node =
            receiver_type_node(receiver).ok_or_else(|| GenError::ReceiverTypeUnresolved {
                method: func.name.clone(),
                reason: "receiver has no type".to_string(),
            })?;
        let receiver_type = resolve_receiver_type(type_node, unit, &func.name)?;

        Ok(Some(Self {
            unit,
            name: func.name.clone(),
            receiver_type,
            parameters: func.parameters.map(|node| Span::of(&node)),
            result: func.result.map(|node| Span::of(&node)),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver_type(&self) -> &str {
        &self.receiver_type
    }

    /// Parameter list exactly as written, parentheses included
    pub fn parameters_text(&self) -> &'u str {
        self.parameters.map_or("", |span| self.unit.slice(span))
    }

    /// Result list exactly as written; empty when the method returns nothing
    pub fn result_text(&self) -> &'u str {
        self.result.map_or("", |span| self.unit.slice(span))
    }

    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            parameters: self.parameters_text().to_string(),
            result: self.result_text().to_string(),
        }
    }
}

/// One interface method line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: String,
    pub result: String,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.parameters)?;
        if !self.result.is_empty() {
            write!(f, " {}", self.result)?;
        }
        Ok(())
    }
}

/// Methods of the target type in discovery order, never sorted or deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<MethodSignature>,
}

impl MethodSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, method: MethodSignature) {
        self.methods.push(method);
    }

    pub fn extend(&mut self, methods: impl IntoIterator<Item = MethodSignature>) {
        self.methods.extend(methods);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodSignature> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// One formatted line per method
    pub fn lines(&self) -> Vec<String> {
        self.methods.iter().map(ToString::to_string).collect()
    }
}

/// Result of extracting one file
#[derive(Debug, Default)]
pub struct Extraction {
    pub methods: Vec<MethodSignature>,
    /// Methods dropped because their receiver could not be resolved
    pub skipped: Vec<GenError>,
}

/// Collects the signatures of methods bound to one type name
#[derive(Debug, Clone)]
pub struct SignatureExtractor {
    target: String,
}

impl SignatureExtractor {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Extract matching methods from one scanned file
    pub fn extract(&self, scan: &ScanResult<'_>) -> GenResult<Extraction> {
        let unit = scan.unit();
        let mut extraction = Extraction::default();

        for func in scan.functions() {
            match ReceiverBinding::from_function(func) {
                Ok(Some(binding)) if binding.receiver_type() == self.target => {
                    extraction.methods.push(binding.signature());
                }
                Ok(_) => {}
                Err(err) if !err.is_fatal() => {
                    tracing::warn!("{}: skipping method: {err}", unit.path().display());
                    extraction.skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(extraction)
    }
}
