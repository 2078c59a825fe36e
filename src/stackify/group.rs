//! Frame grouping
//!
//! Partitions an error's frame list into named groups keyed by library
//! prefixes, in a single pass. A group is a contiguous run of frames; a
//! new group starts precisely when a frame's owner stops matching the
//! current group's name as a literal string prefix. The replacement name
//! is the first configured prefix matching the frame's owner, falling back
//! to [`DEFAULT_GROUP_NAME`].
//!
//! Contiguity is decided against the current group's name only, never
//! recomputed per frame: consecutive frames matching the current name
//! coalesce even when an earlier configured prefix would also match, and
//! consecutive fallback-named frames do not coalesce at all (their owners
//! do not start with the fallback label).
//!
//! The scan seeds an implicit group with the fallback name and id 0 that
//! is never emitted; real group ids therefore start at 1, and frames
//! appended while the seed is current never surface in the output.

use super::frame::Frame;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Reserved name for frames matching no configured library prefix.
pub const DEFAULT_GROUP_NAME: &str = "other";

/// A named, contiguous run of frames within one error's frame list.
///
/// The run is stored as an index range into the frame list it was carved
/// from; [`Stackified::frames`](crate::stackify::Stackified::frames)
/// resolves it back to the frames themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: usize,
    name: String,
    range: Range<usize>,
}

impl Group {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index range of this group's run within the source frame list.
    pub fn frame_range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Partition `frames` into groups against an ordered, first-match-wins
/// prefix list.
pub(crate) fn partition(frames: &[Frame], libraries: &[String]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut group_id = 0;
    let mut current_name = DEFAULT_GROUP_NAME.to_string();

    for (index, frame) in frames.iter().enumerate() {
        if !frame.owner.starts_with(current_name.as_str()) {
            let name = libraries
                .iter()
                .find(|library| frame.owner.starts_with(library.as_str()))
                .cloned()
                .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());
            group_id += 1;
            current_name = name.clone();
            groups.push(Group {
                id: group_id,
                name,
                range: index..index,
            });
        }
        if let Some(current) = groups.last_mut() {
            current.range.end = index + 1;
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(owner: &str) -> Frame {
        Frame::new(owner, "call", "Source.java", 1)
    }

    fn libs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_frame_list_yields_no_groups() {
        assert!(partition(&[], &libs(&["java"])).is_empty());
    }

    #[test]
    fn matching_run_coalesces_into_one_group() {
        let frames = vec![
            frame("java.util.HashMap"),
            frame("java.lang.Thread"),
            frame("java.io.File"),
        ];
        let groups = partition(&frames, &libs(&["java"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id(), 1);
        assert_eq!(groups[0].name(), "java");
        assert_eq!(groups[0].frame_range(), 0..3);
    }

    #[test]
    fn fallback_frames_never_coalesce() {
        let frames = vec![frame("com.myapp.A"), frame("com.myapp.B")];
        let groups = partition(&frames, &libs(&["java"]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name(), DEFAULT_GROUP_NAME);
        assert_eq!(groups[1].name(), DEFAULT_GROUP_NAME);
        assert_eq!(groups[0].frame_range(), 0..1);
        assert_eq!(groups[1].frame_range(), 1..2);
    }

    #[test]
    fn first_configured_prefix_wins() {
        let frames = vec![frame("org.apache.commons.io.IOUtils")];
        let groups = partition(&frames, &libs(&["org.apache", "org.apache.commons"]));
        assert_eq!(groups[0].name(), "org.apache");
    }

    #[test]
    fn contiguity_is_checked_against_the_current_name_only() {
        // Once a run opens under "java", a frame that the earlier
        // configured "java.util" prefix would also match still joins the
        // run, because its owner starts with the current name.
        let frames = vec![frame("java.lang.Thread"), frame("java.util.HashMap")];
        let groups = partition(&frames, &libs(&["java.util", "java"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "java");
        assert_eq!(groups[0].frame_range(), 0..2);
    }

    #[test]
    fn reentering_a_prefix_creates_a_fresh_group() {
        let frames = vec![
            frame("java.util.HashMap"),
            frame("com.myapp.Service"),
            frame("java.lang.Thread"),
        ];
        let groups = partition(&frames, &libs(&["java"]));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name(), "java");
        assert_eq!(groups[1].name(), DEFAULT_GROUP_NAME);
        assert_eq!(groups[2].name(), "java");
        let ids: Vec<usize> = groups.iter().map(Group::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn owner_starting_with_the_fallback_label_feeds_the_hidden_seed() {
        // The seed group is current until the first mismatch, and it is
        // never emitted, so such frames are absent from the output.
        let frames = vec![frame("other.acme.Tool"), frame("com.myapp.Service")];
        let groups = partition(&frames, &libs(&["java"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), DEFAULT_GROUP_NAME);
        assert_eq!(groups[0].frame_range(), 1..2);
    }

    #[test]
    fn runs_partition_the_frame_list() {
        let frames = vec![
            frame("java.util.HashMap"),
            frame("org.apache.commons.io.IOUtils"),
            frame("org.apache.commons.lang3.Validate"),
            frame("java.lang.Thread"),
        ];
        let groups = partition(&frames, &libs(&["java", "org.apache.commons"]));
        let covered: usize = groups.iter().map(Group::len).sum();
        assert_eq!(covered, frames.len());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].frame_range(), 1..3);
    }
}
