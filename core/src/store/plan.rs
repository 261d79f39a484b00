const PENDING: &str = "- [ ] ";
const DONE: &str = "- [x] ";

/// Marks every pending task line whose text is exactly `task` as done.
///
/// A task line is `- [ ] <task>` on its own line, optionally indented and
/// optionally followed by trailing blanks. The task text is matched
/// literally. Returns the rewritten content and the number of lines flipped.
pub fn complete_task(content: &str, task: &str) -> (String, usize) {
    let mut updated = String::with_capacity(content.len());
    let mut count = 0;

    for line in content.split_inclusive('\n') {
        match flip_line(line, task) {
            Some(flipped) => {
                updated.push_str(&flipped);
                count += 1;
            }
            None => updated.push_str(line),
        }
    }

    (updated, count)
}

fn flip_line(line: &str, task: &str) -> Option<String> {
    let (text, eol) = match line.strip_suffix('\n') {
        Some(text) => match text.strip_suffix('\r') {
            Some(text) => (text, "\r\n"),
            None => (text, "\n"),
        },
        None => (line, ""),
    };

    let rest = text.trim_start_matches([' ', '\t']);
    let indent = &text[..text.len() - rest.len()];

    let trailing = rest.strip_prefix(PENDING)?.strip_prefix(task)?;
    if !trailing.chars().all(|c| matches!(c, ' ' | '\t' | '\r')) {
        return None;
    }

    Some(format!("{indent}{DONE}{task}{trailing}{eol}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_single_task() {
        let (out, n) = complete_task("# Plan: X\n## Tasks\n- [ ] Task 1", "Task 1");
        assert_eq!(n, 1);
        assert_eq!(out, "# Plan: X\n## Tasks\n- [x] Task 1");
    }

    #[test]
    fn flips_every_identical_line() {
        let (out, n) = complete_task("- [ ] Ship\n- [ ] Other\n- [ ] Ship\n", "Ship");
        assert_eq!(n, 2);
        assert_eq!(out, "- [x] Ship\n- [ ] Other\n- [x] Ship\n");
    }

    #[test]
    fn does_not_match_prefix_of_longer_task() {
        let (out, n) = complete_task("- [ ] Task 10\n- [ ] Task 1", "Task 1");
        assert_eq!(n, 1);
        assert_eq!(out, "- [ ] Task 10\n- [x] Task 1");
    }

    #[test]
    fn metacharacters_are_literal() {
        let plan = "- [ ] Fix parser (again)*\n- [ ] Fix parser again";
        let (out, n) = complete_task(plan, "Fix parser (again)*");
        assert_eq!(n, 1);
        assert_eq!(out, "- [x] Fix parser (again)*\n- [ ] Fix parser again");
    }

    #[test]
    fn dollar_signs_are_not_expanded() {
        let (out, n) = complete_task("- [ ] Price $1 and $name", "Price $1 and $name");
        assert_eq!(n, 1);
        assert_eq!(out, "- [x] Price $1 and $name");
    }

    #[test]
    fn keeps_indentation_and_crlf() {
        let (out, n) = complete_task("- [ ] Parent\r\n  - [ ] Child\r\n", "Child");
        assert_eq!(n, 1);
        assert_eq!(out, "- [ ] Parent\r\n  - [x] Child\r\n");
    }

    #[test]
    fn very_long_task_name() {
        let task = "x".repeat(2_000_000);
        let plan = format!("## Tasks\n- [ ] {task}\n- [ ] short");
        let (out, n) = complete_task(&plan, &task);
        assert_eq!(n, 1);
        assert!(out.starts_with("## Tasks\n- [x] xxx"));
        assert!(out.ends_with("\n- [ ] short"));
        assert_eq!(out.len(), plan.len());
    }

    #[test]
    fn trailing_blanks_are_kept() {
        let (out, n) = complete_task("- [ ] Deploy  \t\n", "Deploy");
        assert_eq!(n, 1);
        assert_eq!(out, "- [x] Deploy  \t\n");
    }

    #[test]
    fn done_task_is_left_alone() {
        let (out, n) = complete_task("- [x] Task 1", "Task 1");
        assert_eq!(n, 0);
        assert_eq!(out, "- [x] Task 1");
    }
}
