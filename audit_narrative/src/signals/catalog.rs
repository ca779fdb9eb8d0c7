//! Signal catalog - the report text behind every recognized signal.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::SignalKey;
use crate::error::{NarrativeError, Result};

/// Texts shipped with the game, keyed by normalized signal.
const BUILTIN_ENTRIES: [(&str, &str); 11] = [
    (
        "ayadi_cool",
        concat!(
            "Ayadi : S'est montré visiblement tendu au début de l'audit, mais votre attitude posée ",
            "et votre manière de cadrer l'échange ont contribué à le rassurer. ",
            "Il a pu répondre plus librement une fois en confiance. ",
            "Il estime que votre posture d'auditeur était professionnelle et respectueuse.",
            "Il vous a bien détaillé les sécurités mises en place, ce qui a facilité l’audit."
        ),
    ),
    (
        "ayadi_mauvais",
        concat!(
            "Ayadi : A ressenti l'entretien comme une mise en accusation. ",
            "Le ton et la manière de poser les questions ont renforcé son stress. ",
            "Il a eu le sentiment d'être jugé plutôt qu'accompagné, ",
            "ce qui a nui à la qualité de l'échange.",
            "Il n'a pas fourni les informations complètes sur les sécurités mises en place, ce qui a compliqué l’audit."
        ),
    ),
    (
        "bryan_cool",
        concat!(
            "Bryan : Abordait l'audit avec méfiance, craignant des conséquences sur son travail. ",
            "Votre assurance et votre clarté lui ont permis de se détendre progressivement. ",
            "Il a perçu l'échange comme exigeant mais juste.",
            "Il vous a bien donné les informations concernant les achats de l’exercice précédent et elle sont conformes aux attentes."
        ),
    ),
    (
        "bryan_mauvais",
        concat!(
            "Bryan : S'est senti rapidement sur la défensive. ",
            "Il a eu l'impression que chaque réponse pouvait se retourner contre lui. ",
            "Cette pression a limité sa coopération et rendu l'entretien tendu.",
            "Il a omis de fournir certaines informations sur les achats de l’exercice précédent, ce qui a compliqué l’audit."
        ),
    ),
    (
        "roy_cool",
        concat!(
            "Roy : A abordé l'audit avec une inquiétude manifeste. ",
            "Votre écoute et votre ton bienveillant ont créé un climat de confiance. ",
            "Elle s'est sentie suffisamment à l'aise pour évoquer des points sensibles.",
            "Elle vous a transmis toutes les informations demandées des fiches de paye de manière claire et complète."
        ),
    ),
    (
        "roy_mauvais",
        concat!(
            "Roy : A vécu l'entretien comme inconfortable. ",
            "Le manque de chaleur dans l'échange a accentué sa peur des répercussions. ",
            "Elle est restée sur la réserve et ne vous a pas transmis les informations nécessaires."
        ),
    ),
    (
        "ilias_cool",
        concat!(
            "Ilias : Redoutait un audit purement technique et sanctionnant. ",
            "Votre manière de poser les questions a réduit cette crainte. ",
            "Il a pu expliquer ses choix sans se sentir attaqué.",
            "Vous a informé de la réparation d'un faille de sécurité récente, montrant sa volonté de transparence."
        ),
    ),
    (
        "ilias_mauvais",
        concat!(
            "Ilias : A perçu l'audit comme un test de compétence permanent. ",
            "La pression ressentie a renforcé son stress et limité ses explications. ",
            "Il craint que l'échange ne reflète pas fidèlement son travail réel.",
            "Il a omis de mentionner une faille de sécurité récente, ce qui a nui à la confiance établie."
        ),
    ),
    (
        "lebot_cool",
        concat!(
            "Lebot : A abordé l'audit avec sérieux et une certaine appréhension initiale. ",
            "Votre posture professionnelle et structurée lui a permis de répondre ",
            "aux questions sans se sentir mis sous pression. ",
            "L'entretien s'est déroulé dans un cadre formel mais maîtrisé."
        ),
    ),
    (
        "lebot_witcher",
        concat!(
            "Lebot : La mention de l'univers de The Witcher a instauré une véritable connivence. ",
            "Se sentant compris et mis à l'aise, il a exprimé ses réponses ",
            "avec assurance et spontanéité. ",
            "L'audit s'est transformé en échange de confiance constructive."
        ),
    ),
    (
        "lebot_sda",
        concat!(
            "Lebot : La référence au Seigneur des Anneaux a immédiatement créé un lien négatif. ",
            "Il a semblé se refermer, adoptant une posture plus défensive. ",
            "L'audit a été marqué par une certaine distance, ",
            "rendant l'échange moins fluide et plus formel."
        ),
    ),
];

/// Read-only mapping from signal key to report text.
///
/// Built once at startup. Keys absent from the catalog are not errors; they
/// are simply not recognized.
#[derive(Debug, Clone, Default)]
pub struct SignalCatalog {
    entries: HashMap<SignalKey, String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    signals: BTreeMap<String, String>,
}

impl SignalCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(key, text)| (SignalKey::parse(key), (*text).to_string()))
            .collect();
        Self { entries }
    }

    /// Build a catalog from raw `(key, text)` pairs. Keys are normalized.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::new();
        for (raw, text) in entries {
            let key = SignalKey::parse(raw.as_ref());
            if key.is_empty() {
                return Err(NarrativeError::EmptyCatalogKey);
            }
            if catalog.entries.contains_key(&key) {
                return Err(NarrativeError::DuplicateCatalogKey(key.to_string()));
            }
            catalog.entries.insert(key, text.into());
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML document with a `[signals]` table.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::from_entries(file.signals)
    }

    /// Look up the report text for a key.
    pub fn lookup(&self, key: &SignalKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &SignalKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all recognized keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &SignalKey> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = SignalCatalog::builtin();
        assert_eq!(catalog.len(), 11);

        let text = catalog.lookup(&SignalKey::parse("lebot_witcher")).unwrap();
        assert!(text.starts_with("Lebot : La mention de l'univers de The Witcher"));

        assert!(catalog.lookup(&SignalKey::parse("totally_unknown_key")).is_none());
        assert!(!catalog.contains(&SignalKey::end_report()));
    }

    #[test]
    fn test_builtin_texts_keep_their_joins() {
        let catalog = SignalCatalog::builtin();
        let text = catalog.lookup(&SignalKey::parse("roy_cool")).unwrap();
        assert!(text.contains("points sensibles.Elle vous a transmis"));
    }

    #[test]
    fn test_from_toml_normalizes_keys() {
        let catalog = SignalCatalog::from_toml(
            r#"
            [signals]
            "Haristoy_Cool" = "Haristoy : RAS."
            haristoy_mauvais = "Haristoy : Tendu."
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.lookup(&SignalKey::parse("haristoy_cool")),
            Some("Haristoy : RAS.")
        );
    }

    #[test]
    fn test_duplicate_after_normalization_rejected() {
        let err = SignalCatalog::from_entries([("roy_cool", "a"), (" ROY_COOL", "b")]).unwrap_err();
        assert!(matches!(err, NarrativeError::DuplicateCatalogKey(key) if key == "roy_cool"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = SignalCatalog::from_entries([("  ", "blank")]).unwrap_err();
        assert!(matches!(err, NarrativeError::EmptyCatalogKey));
    }
}
