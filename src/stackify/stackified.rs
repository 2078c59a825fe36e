//! Recovery result
//!
//! [`Stackified`] bundles the raw input, the reconstructed error chain and
//! the groups carved out of the outermost error's frames. Groups store
//! index ranges, so resolving a group back to its frames goes through
//! [`Stackified::frames`] and always yields a slice of the outermost
//! error's own frame list.

use super::chain::ReconstructedError;
use super::frame::Frame;
use super::group::Group;
use serde::{Deserialize, Serialize};

/// Result of one recovery run over one trace dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stackified {
    stacktrace: String,
    description: String,
    error: ReconstructedError,
    groups: Vec<Group>,
}

impl Stackified {
    pub(crate) fn new(stacktrace: String, error: ReconstructedError, groups: Vec<Group>) -> Self {
        let description = error.to_string();
        Self {
            stacktrace,
            description,
            error,
            groups,
        }
    }

    /// The raw input, unmodified.
    pub fn stacktrace(&self) -> &str {
        &self.stacktrace
    }

    /// String form of the outermost error.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The outermost reconstructed error; its `cause` chain threads down
    /// to the root cause.
    pub fn error(&self) -> &ReconstructedError {
        &self.error
    }

    /// All groups, in creation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Groups carrying `name`, in creation order.
    pub fn groups_named(&self, name: &str) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.name() == name).collect()
    }

    /// The group with the given id, if any.
    pub fn group(&self, id: usize) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// The frames of `group`, as a slice of the outermost error's frame
    /// list. A group from a different run resolves to an empty slice.
    pub fn frames(&self, group: &Group) -> &[Frame] {
        self.error.frames.get(group.frame_range()).unwrap_or(&[])
    }

    /// The frames of the group with the given id, if any.
    pub fn group_frames(&self, id: usize) -> Option<&[Frame]> {
        self.group(id).map(|group| self.frames(group))
    }

    /// Render the description and each group as `(id) name` followed by
    /// its frames, one per indented line.
    pub fn pretty_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.description);
        out.push('\n');
        for group in &self.groups {
            out.push('\n');
            out.push_str(&format!("({}) {}\n", group.id(), group.name()));
            for frame in self.frames(group) {
                out.push_str(&format!("\t\t{}\n", frame));
            }
        }
        out
    }

    pub fn pretty_print(&self) {
        println!("{}", self.pretty_string());
    }
}

#[cfg(test)]
mod tests {
    use crate::stackify::Stackifier;

    fn stackified() -> super::Stackified {
        let trace = "java.lang.RuntimeException: boom\n\
                     \tat com.acme.Foo.bar(Foo.java:42)\n\
                     \tat java.lang.Thread.run(Thread.java:748)\n";
        Stackifier::new(vec!["java".to_string()])
            .stackify(trace)
            .unwrap()
    }

    #[test]
    fn groups_resolve_to_slices_of_the_outer_frames() {
        let result = stackified();
        let all: Vec<_> = result
            .groups()
            .iter()
            .flat_map(|g| result.frames(g))
            .collect();
        assert_eq!(all.len(), result.error().frames().len());
    }

    #[test]
    fn group_queries_find_by_name_and_id() {
        let result = stackified();
        assert_eq!(result.groups_named("java").len(), 1);
        assert_eq!(result.group(2).map(|g| g.name()), Some("java"));
        assert_eq!(result.group_frames(2).map(|frames| frames.len()), Some(1));
        assert!(result.group(99).is_none());
    }

    #[test]
    fn pretty_rendering() {
        let result = stackified();
        insta::assert_snapshot!(result.pretty_string(), @r"
        java.lang.RuntimeException: boom

        (1) other
        		com.acme.Foo.bar(Foo.java:42)

        (2) java
        		java.lang.Thread.run(Thread.java:748)
        ");
    }
}
