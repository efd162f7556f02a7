//! Assembles one `PageRecord` from one document by threading a draft through
//! the `Maybe` pipeline in a fixed field order. Order matters: extraction of
//! pronunciation entries needs the already-assigned headword.

use kama_core::{AuditLog, DocumentQuery, Maybe};
use kama_types::PageRecord;

use crate::alphabet::GlyphAlphabet;
use crate::{entries, fields};

/// Build the candidate record for one document.
///
/// `page` is the document's stable identifier (path or URL), used in audit
/// messages. A missing required field short-circuits the whole chain to
/// `Absent` after pushing a `[required]` audit event — no partial record is
/// ever returned.
pub fn build_record<Q: DocumentQuery>(
    doc: Q,
    page: &str,
    alphabet: &GlyphAlphabet,
    audit: &mut AuditLog,
) -> Maybe<PageRecord> {
    let draft = Maybe::present(PageRecord::default());

    // Required fields; each one short-circuits everything after it.
    let draft = draft.assign(
        |_| {
            fields::index(doc)
                .on_absent(|| audit.required(format!("{page}: index marker missing")))
        },
        |r, v| r.index = v,
    );
    let draft = draft.assign(
        |r: &PageRecord| {
            let at = r.index;
            fields::translation(doc)
                .on_absent(|| audit.required(format!("{page} #{at}: translation missing")))
        },
        |r, v| r.translation = v,
    );
    let draft = draft.assign(
        |r: &PageRecord| {
            let seen = format!("#{} ({})", r.index, r.translation);
            fields::character(doc)
                .on_absent(|| audit.required(format!("{page} {seen}: headword missing")))
        },
        |r, v| r.character = v,
    );
    let draft = draft.assign(
        |r: &PageRecord| {
            let seen = format!("#{} {} ({})", r.index, r.character, r.translation);
            fields::stars(doc)
                .on_absent(|| audit.required(format!("{page} {seen}: rating region missing")))
        },
        |r, v| r.stars = v,
    );

    // Defaulting and optional fields; these cannot short-circuit.
    let draft = draft.assign(
        |r: &PageRecord| Maybe::present(fields::components_text(doc, &r.character, &r.translation)),
        |r, v| r.components = v,
    );
    let draft = draft.assign(
        |_| Maybe::present(fields::onyomi(doc)),
        |r, v| r.onyomi = v,
    );
    let draft = draft.assign(
        |_| Maybe::present(fields::translation_mnemonic(doc)),
        |r, v| r.translation_mnemonic = v,
    );
    let draft = draft.assign(
        |_| Maybe::present(fields::onyomi_mnemonic(doc)),
        |r, v| r.onyomi_mnemonic = v,
    );
    let draft = draft.assign(
        |_| Maybe::present(fields::description(doc)),
        |r, v| r.description = v,
    );

    // Entry tables last: both depend on earlier fields.
    let draft = draft.assign(
        |r: &PageRecord| Maybe::present(entries::kunyomi_entries(doc, &r.character)),
        |r, v| r.kunyomi = v,
    );
    let draft = draft.assign(
        |_| Maybe::present(entries::jukugo_entries(doc, alphabet)),
        |r, v| r.jukugo = v,
    );

    draft.effect(|r| tracing::debug!(index = r.index, character = %r.character, "record built"))
}
