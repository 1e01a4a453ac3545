//! Parsing `Name` / `Name[Job]` benchmark names.

use std::sync::OnceLock;

use regex::Regex;

/// Lazy base name, then an optional trailing `[job]` with no nested brackets.
const JOB_NAME_PATTERN: &str = r"^(?s)(.*?)(?:\[([^\[\]]+)\])?$";

fn job_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(JOB_NAME_PATTERN).expect("job name pattern is valid"))
}

/// A benchmark name split into logical base name and optional job qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName<'a> {
    pub base: &'a str,
    pub job: Option<&'a str>,
}

impl<'a> JobName<'a> {
    /// Split `name`. Only the last bracketed group is the job:
    /// `A[x][y]` is base `A[x]`, job `y`. `Foo[]` has no job.
    pub fn parse(name: &'a str) -> Self {
        match job_name_regex().captures(name) {
            Some(caps) => Self {
                base: caps.get(1).map_or(name, |m| m.as_str()),
                job: caps.get(2).map(|m| m.as_str()),
            },
            None => Self {
                base: name,
                job: None,
            },
        }
    }

    /// The job, or `default_job` when the name has none.
    pub fn job_or<'b>(&self, default_job: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.job.unwrap_or(default_job)
    }
}
