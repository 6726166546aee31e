//! Non-interactive subcommands. Each writes its report to `out` so the
//! binary can print to stdout and tests can capture a buffer.

use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, Utc};
use jobboard_core::display::{posted_ago, salary_range, type_label};
use jobboard_core::posting::PostJobForm;
use jobboard_core::structured_data::JobPosting;
use jobboard_core::{JobCatalog, JobRecord, LoadError};
use jobboard_sheets::post::post_job;
use jobboard_sheets::template::{write_template, TEMPLATE_FAILED};
use jobboard_sheets::upload::upload_file;
use jobboard_sheets::{load_catalog, DataSource};
use std::io::Write;
use std::path::Path;

/// Run the async load pipeline to completion on a fresh runtime.
pub fn load_blocking(source: &DataSource) -> anyhow::Result<Result<JobCatalog, LoadError>> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    Ok(runtime.block_on(load_catalog(source)))
}

/// Print the catalog, optionally filtered, as text lines or JSON.
pub fn list(
    out: &mut impl Write,
    catalog: &JobCatalog,
    filter: Option<&str>,
    json: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let jobs = catalog.filter(filter.unwrap_or(""));
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&jobs)?)?;
        return Ok(());
    }
    if jobs.is_empty() {
        writeln!(out, "No jobs found.")?;
        return Ok(());
    }
    for job in jobs {
        writeln!(
            out,
            "{:<14} {} | {} | {} | {} | {} | {}",
            job.id,
            job.title,
            job.company,
            job.location,
            type_label(&job.job_type),
            salary_range(&job.salary),
            posted_ago(job.posted_date, now)
        )?;
    }
    Ok(())
}

/// Print one job, or its JSON-LD block.
pub fn show(
    out: &mut impl Write,
    catalog: &JobCatalog,
    id: &str,
    schema: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let job = catalog.find(id).ok_or_else(|| anyhow!("Job not found"))?;
    if schema {
        writeln!(out, "{}", JobPosting::from_record_at(job, now).to_script_tag()?)?;
    } else {
        write!(out, "{}", render_detail(job, now))?;
    }
    Ok(())
}

/// Plain-text detail view.
pub fn render_detail(job: &JobRecord, now: DateTime<Utc>) -> String {
    let mut text = format!(
        "{}\n{}\n{} · {}\n{}\nPosted {}\n\nDescription\n{}\n\nRequirements\n",
        job.title,
        job.company,
        job.location,
        type_label(&job.job_type),
        salary_range(&job.salary),
        posted_ago(job.posted_date, now),
        job.description,
    );
    for requirement in &job.requirements {
        text.push_str(&format!("  • {requirement}\n"));
    }
    text.push_str(&format!("\nApply: {}\n", job.application_url));
    text
}

pub fn template(out: &mut impl Write, path: &Path, today: NaiveDate) -> anyhow::Result<()> {
    write_template(path, today).context(TEMPLATE_FAILED)?;
    writeln!(out, "Template written to {}", path.display())?;
    Ok(())
}

pub fn upload(out: &mut impl Write, path: &Path, today: NaiveDate) -> anyhow::Result<()> {
    let report = upload_file(path, today)?;
    writeln!(out, "{}", report.message())?;
    writeln!(
        out,
        "{} rows read, {} valid, {} skipped",
        report.rows,
        report.jobs.len(),
        report.skipped
    )?;
    for job in &report.jobs {
        writeln!(out, "  {} {} ({})", job.id, job.title, job.company)?;
    }
    Ok(())
}

pub fn post(out: &mut impl Write, form: &PostJobForm, now: DateTime<Utc>) -> anyhow::Result<()> {
    let posted = post_job(form, now)?;
    writeln!(out, "{}", posted.message())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&posted.job)?)?;
    Ok(())
}
