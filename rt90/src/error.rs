//! Types d'erreurs pour le crate rt90

use thiserror::Error;

/// Erreurs de lecture d'une coordonnée textuelle
///
/// La conversion elle-même ne renvoie jamais d'erreur.
#[derive(Debug, Error, PartialEq)]
pub enum Rt90Error {
    /// Texte qui n'est pas une paire de nombres
    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    /// Valeur infinie ou NaN
    #[error("Non-finite coordinate: {input}")]
    NonFinite { input: String },
}

impl Rt90Error {
    /// Crée une erreur de coordonnée invalide avec contexte
    pub fn invalid_coordinate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
