/*
Implements:
 - parsing of course registration files (one student per line: `STUDENT_ID|COURSE1,COURSE2,...`)
 - conversion of the registrations into conflicts (two courses taken by the same student conflict)
*/
use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::rest;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::scheduler::Scheduler;


/** counters of a registration ingestion */
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationStats {
    /// number of lines read
    pub nb_lines: usize,
    /// lines without any course (no '|' or an empty course field)
    pub nb_skipped: usize,
    /// course registrations added (after removing empty and duplicate courses)
    pub nb_registrations: usize,
}

/// splits a line into (student, courses). Fails if there is no '|'.
/// Only the second field is kept, further fields are ignored.
pub fn read_registration(s:&str) -> IResult<&str, (&str,&str)> {
    let (remaining, student) = take_until("|")(s)?;
    let (remaining, _) = tag("|")(remaining)?;
    let (remaining, courses) = alt((take_until("|"), rest))(remaining)?;
    Ok((remaining, (student, courses)))
}

/** course names of a course field: trimmed, non empty, without duplicates
(first occurrence order) */
pub fn read_courses(courses:&str) -> Vec<&str> {
    let mut res:Vec<&str> = Vec::new();
    for course in courses.split(',').map(|c| c.trim()) {
        if !course.is_empty() && !res.contains(&course) {
            res.push(course);
        }
    }
    res
}

/** adds the courses of every line to the scheduler and a conflict between
every pair of courses taken by the same student. Malformed lines and lines
without any course (e.g. `S1|`) are skipped. */
pub fn parse_registrations(scheduler:&mut Scheduler, content:&str) -> RegistrationStats {
    let mut stats = RegistrationStats::default();
    for (line_number, line) in content.lines().enumerate() {
        stats.nb_lines += 1;
        let courses = match read_registration(line.trim_end_matches('\r')) {
            Ok((_,(_, courses))) => read_courses(courses),
            Err(_) => {
                debug!(line = line_number+1, "skipping line without course field");
                stats.nb_skipped += 1;
                continue;
            }
        };
        if courses.is_empty() {
            debug!(line = line_number+1, "skipping line without courses");
            stats.nb_skipped += 1;
            continue;
        }
        for course in courses.iter() {
            scheduler.add_class(course);
        }
        for (i,c1) in courses.iter().enumerate() {
            for c2 in courses[i+1..].iter() {
                scheduler.add_conflict(c1, c2);
            }
        }
        stats.nb_registrations += courses.len();
    }
    stats
}

/** reads a registration file and adds it to the scheduler.
The whole file is read before parsing: on error, the scheduler is unchanged. */
pub fn read_registrations(scheduler:&mut Scheduler, filename:&str) -> Result<RegistrationStats> {
    let content = fs::read_to_string(filename)
        .map_err(|source| Error::Io { path: filename.into(), source })?;
    let stats = parse_registrations(scheduler, &content);
    info!(
        file = filename,
        lines = stats.nb_lines,
        skipped = stats.nb_skipped,
        courses = scheduler.graph().vertex_count(),
        conflicts = scheduler.graph().edge_count(),
        "registrations read"
    );
    Ok(stats)
}

/** five courses and six conflicts, handy to try the scheduler without a file */
pub fn sample_conflicts(scheduler:&mut Scheduler) {
    for class_name in ["Math101", "CS101", "Physics101", "English101", "History101"].iter() {
        scheduler.add_class(class_name);
    }
    scheduler.add_conflict("Math101", "CS101");
    scheduler.add_conflict("Math101", "Physics101");
    scheduler.add_conflict("Math101", "English101");
    scheduler.add_conflict("CS101", "History101");
    scheduler.add_conflict("Physics101", "History101");
    scheduler.add_conflict("English101", "History101");
}
