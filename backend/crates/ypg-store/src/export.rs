//! CSV rendering of admin reports.

use std::collections::BTreeMap;

use ypg_core::{College, ExportKind, ExportRequest, MemberRecord, MemberStatus, PortfolioItem};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Renders `request` over the given records. Members are filtered by join date
/// and portfolio items by upload date, both inclusive.
pub fn render_csv(
    request: &ExportRequest,
    members: &[MemberRecord],
    portfolio: &[PortfolioItem],
) -> String {
    let members: Vec<&MemberRecord> = members
        .iter()
        .filter(|m| request.contains(m.joined_date))
        .collect();
    let portfolio: Vec<&PortfolioItem> = portfolio
        .iter()
        .filter(|p| request.contains(p.uploaded_at.date_naive()))
        .collect();

    let mut out = String::new();
    match request.kind {
        ExportKind::Students => students(&mut out, &members),
        ExportKind::Portfolios => portfolios(&mut out, &portfolio),
        ExportKind::Activity => activity(&mut out, &members, &portfolio),
        ExportKind::Colleges => colleges(&mut out, &members),
    }
    out
}

fn students(out: &mut String, members: &[&MemberRecord]) {
    write_row(
        out,
        &[
            "id",
            "name",
            "email",
            "college",
            "interest",
            "email_verified",
            "onboarding_completed",
            "status",
            "joined_date",
        ],
    );
    for m in members {
        write_row(
            out,
            &[
                &m.id,
                &m.name,
                &m.email,
                m.college.display_name(),
                m.interest.display_name(),
                &m.email_verified.to_string(),
                &m.onboarding_completed.to_string(),
                m.status().as_str(),
                &m.joined_date.to_string(),
            ],
        );
    }
}

fn portfolios(out: &mut String, items: &[&PortfolioItem]) {
    write_row(
        out,
        &[
            "id",
            "owner_id",
            "title",
            "file_type",
            "file_name",
            "size_bytes",
            "uploaded_at",
        ],
    );
    for p in items {
        write_row(
            out,
            &[
                &p.id,
                &p.owner_id,
                &p.title,
                p.file_type.as_str(),
                &p.file_name,
                &p.size_bytes.to_string(),
                &p.uploaded_at.to_rfc3339(),
            ],
        );
    }
}

fn activity(out: &mut String, members: &[&MemberRecord], items: &[&PortfolioItem]) {
    write_row(
        out,
        &["id", "name", "status", "joined_date", "portfolio_uploads"],
    );
    for m in members {
        let uploads = items.iter().filter(|p| p.owner_id == m.id).count();
        write_row(
            out,
            &[
                &m.id,
                &m.name,
                m.status().as_str(),
                &m.joined_date.to_string(),
                &uploads.to_string(),
            ],
        );
    }
}

fn colleges(out: &mut String, members: &[&MemberRecord]) {
    // Known colleges first in catalog order, then free-text entries by name.
    let mut counts: BTreeMap<(usize, String), (usize, usize)> = BTreeMap::new();
    for m in members {
        let rank = College::KNOWN
            .iter()
            .position(|c| c == &m.college)
            .unwrap_or(College::KNOWN.len());
        let entry = counts
            .entry((rank, m.college.display_name().to_string()))
            .or_default();
        match m.status() {
            MemberStatus::Active => entry.0 += 1,
            MemberStatus::Pending => entry.1 += 1,
        }
    }

    write_row(out, &["college", "students", "active", "pending"]);
    for ((_, college), (active, pending)) in counts {
        write_row(
            out,
            &[
                &college,
                &(active + pending).to_string(),
                &active.to_string(),
                &pending.to_string(),
            ],
        );
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
