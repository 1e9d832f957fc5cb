//! Canonical PFCE principle definitions.
//!
//! The table is fixed: the five principles of the PFCE framework with the
//! long-form definitions shown to practitioners during step six of a
//! walkthrough. Lookup is tolerant of casing and surrounding whitespace
//! but never fuzzy beyond that.

/// The five PFCE principles with their canonical definitions, in the
/// framework's presentation order.
pub const PRINCIPLE_DEFINITIONS: [(&str, &str); 5] = [
    (
        "Beneficence",
        "Act to promote the well-being of the people and communities the \
         system serves; security decisions should leave residents better \
         protected, not merely the infrastructure.",
    ),
    (
        "Non-maleficence",
        "Avoid foreseeable harm, including harm caused by the response \
         itself; a containment step that cuts off essential services can \
         injure the public as surely as the attack.",
    ),
    (
        "Autonomy",
        "Preserve the ability of affected people to make informed choices \
         about matters that concern them; do not quietly decide on their \
         behalf what risks they must absorb.",
    ),
    (
        "Justice",
        "Distribute the benefits, costs, and risks of a decision fairly; \
         do not shift the burden onto those least able to bear it or least \
         represented in the room.",
    ),
    (
        "Explicability",
        "Make the decision understandable and auditable after the fact; \
         someone must be able to say what was done, why, and who is \
         accountable for it.",
    ),
];

/// Look up the canonical definition for a principle name.
///
/// Matching trims surrounding whitespace and ignores ASCII case, so
/// `" justice "` resolves. Anything else returns `None`.
pub fn principle_definition(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    PRINCIPLE_DEFINITIONS
        .iter()
        .find(|(principle, _)| principle.eq_ignore_ascii_case(needle))
        .map(|(_, definition)| *definition)
}
