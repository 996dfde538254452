use email_reply_parser::normalize;

#[test]
fn test_normalize_crlf() {
    assert_eq!(normalize("a\r\nb\r\n"), "a\nb\n");
}

#[test]
fn test_normalize_keeps_lone_carriage_return() {
    assert_eq!(normalize("a\rb"), "a\rb");
}

#[test]
fn test_normalize_leaves_plain_text_alone() {
    let body = "Hello\n\n  indented  \nOn second thought, no.\n";
    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

// --- multi-line reply headers ---

#[test]
fn test_normalize_joins_wrapped_header() {
    let body = "Reply\n\nOn Dec 16, 2011, at 12:47 PM, Corey Donohoe\n<reply@reply.github.com>\nwrote:\n\n> Quoted";

    assert_eq!(
        normalize(body),
        "Reply\n\nOn Dec 16, 2011, at 12:47 PM, Corey Donohoe <reply@reply.github.com> wrote:\n\n> Quoted"
    );
}

#[test]
fn test_normalize_joins_wrapped_header_with_crlf() {
    let body = "Reply\r\n\r\nOn Mon, Jan 2, 2012, Alice\r\n<a@example.com> wrote:\r\n> Quoted";

    assert_eq!(
        normalize(body),
        "Reply\n\nOn Mon, Jan 2, 2012, Alice <a@example.com> wrote:\n> Quoted"
    );
}

#[test]
fn test_normalize_header_is_case_insensitive() {
    let body = "ON Mon, Jan 2, 2012, Alice\n<a@example.com> WROTE:\n> Quoted";

    assert_eq!(
        normalize(body),
        "ON Mon, Jan 2, 2012, Alice <a@example.com> WROTE:\n> Quoted"
    );
}

#[test]
fn test_normalize_single_line_header_unchanged() {
    let body = "On Mon, Jan 2, 2012, Alice wrote:\n> Quoted\n";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_header_must_start_a_line() {
    let body = "Well, On Mon, Jan 2, 2012, Alice\n<a@example.com> wrote:\n> Quoted";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_wrote_must_end_a_line() {
    let body = "On Monday I\nwrote: the report\n";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_requires_whitespace_after_on() {
    let body = "Once upon a time\nsomeone wrote:\n";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_does_not_swallow_two_headers() {
    let body = "On your remote host you can run:\n\n     telnet 127.0.0.1 52698\n\n\
                This should connect (on your Mac).\n\n\
                On 9 Jan 2014, at 2:47, George Plymale wrote:\n\n> Quoted\n";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_two_wrapped_headers_only_joins_the_last() {
    let body = "On Mon, Jan 2, 2012, Alice\n<a@example.com> wrote:\n> Hi\n\n\
                On Sun, Jan 1, 2012, Bob\n<b@example.com> wrote:\n> Hey";

    assert_eq!(
        normalize(body),
        "On Mon, Jan 2, 2012, Alice\n<a@example.com> wrote:\n> Hi\n\n\
         On Sun, Jan 1, 2012, Bob <b@example.com> wrote:\n> Hey"
    );
}

#[test]
fn test_normalize_later_on_without_wrote_does_not_block() {
    let body = "On Mon, Alice\nwrote:\n> carry on regardless";

    assert_eq!(normalize(body), "On Mon, Alice wrote:\n> carry on regardless");
}

#[test]
fn test_normalize_header_with_multibyte_text() {
    let body = "On Mon, Zoë Ångström\n<zoe@example.com> wrote:\n> Hej";

    assert_eq!(
        normalize(body),
        "On Mon, Zoë Ångström <zoe@example.com> wrote:\n> Hej"
    );
}

// --- underscore dividers ---

#[test]
fn test_normalize_separates_divider_from_text_above() {
    assert_eq!(
        normalize("Reply above line\n________\nFrom: someone"),
        "Reply above line\n\n________\nFrom: someone"
    );
}

#[test]
fn test_normalize_divider_after_blank_line_unchanged() {
    let body = "Reply\n\n________________\nFrom: someone";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_short_underscore_run_unchanged() {
    let body = "Reply\n_______\nFrom: someone";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_underscores_mid_line_unchanged() {
    let body = "Fill in the blank: ____________ thanks";

    assert_eq!(normalize(body), body);
}

#[test]
fn test_normalize_stacked_dividers() {
    assert_eq!(
        normalize("text\n________\n________"),
        "text\n\n________\n\n________"
    );
}

#[test]
fn test_normalize_divider_on_first_line_unchanged() {
    let body = "________\nFrom: someone";

    assert_eq!(normalize(body), body);
}
