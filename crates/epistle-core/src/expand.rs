//! Relation expander: records to flat (document, person) mentions.
//!
//! # Overview
//!
//! The co-occurrence matrix wants one row per (document, person) pair.
//! Records arrive with multi-valued columns (`references`, `people`) whose
//! elements may be comma- or semicolon-delimited lists, plus the
//! single-valued `source` and `target` columns. This module unnests all of
//! them into [`Mention`] rows:
//!
//! 1. Split every multi-valued element on `,` and `;`.
//! 2. Normalize every identifier (trim, lowercase).
//! 3. Drop values that are empty after normalization.
//!
//! The transform is pure and deterministic: mentions appear in record
//! order, and within a record in role order (source, target, references,
//! people).

use crate::record::{Record, normalize_id};

/// How a person is attached to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Sender of the letter.
    Source,
    /// Recipient of the letter.
    Target,
    /// Referenced in the letter body.
    Reference,
    /// Subject-heading person.
    Subject,
}

/// One (document, person) pair after unnesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Document the person is attached to.
    pub document_id: String,
    /// Normalized person identifier (non-empty).
    pub person: String,
    /// Which column the person came from.
    pub role: Role,
}

/// Unnest a batch of records into flat mentions.
///
/// Empty identifiers (after normalization) produce no mention; a record
/// whose person columns are all empty contributes nothing. Roles are kept
/// so the incidence matrix can sum multiple attachments of the same person
/// to the same document.
#[must_use]
pub fn expand_records(records: &[Record]) -> Vec<Mention> {
    let mut mentions = Vec::new();
    for record in records {
        expand_record(record, &mut mentions);
    }
    mentions
}

fn expand_record(record: &Record, out: &mut Vec<Mention>) {
    push_mention(&record.document_id, &record.source, Role::Source, out);
    push_mention(&record.document_id, &record.target, Role::Target, out);
    for element in &record.references {
        for part in split_list(element) {
            push_mention(&record.document_id, part, Role::Reference, out);
        }
    }
    for element in &record.people {
        for part in split_list(element) {
            push_mention(&record.document_id, part, Role::Subject, out);
        }
    }
}

/// Split a raw multi-valued element on the archive's list delimiters.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([',', ';'])
}

fn push_mention(document_id: &str, raw: &str, role: Role, out: &mut Vec<Mention>) {
    let person = normalize_id(raw);
    if person.is_empty() {
        return;
    }
    out.push(Mention {
        document_id: document_id.to_string(),
        person,
        role,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
