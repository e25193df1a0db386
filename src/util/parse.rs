/// Splits a chat message into command name and argument text.
///
/// # Arguments
/// - `content` - Raw message content
/// - `prefix` - Command prefix, e.g. "!"
///
/// # Returns
/// - `Some((name, args))` - Message starts with the prefix followed by a name; `args`
///   is the trimmed remainder and may be empty
/// - `None` - Message is not a command invocation
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    let body = content.trim_start().strip_prefix(prefix)?;
    let body = body.trim_end();

    let (name, args) = match body.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim_start()),
        None => (body, ""),
    };

    if name.is_empty() {
        return None;
    }

    Some((name, args))
}

/// Parses a user mention (`<@id>` or `<@!id>`) or a raw user id.
///
/// # Returns
/// - `Some(u64)` - Non-zero user id
/// - `None` - Argument is neither a mention nor a numeric id
pub fn parse_user_id(arg: &str) -> Option<u64> {
    let arg = arg.trim();
    let raw = arg
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|inner| inner.trim_start_matches('!'))
        .unwrap_or(arg);

    raw.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Splits the first whitespace separated argument from the rest.
pub fn split_first_arg(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    Some(match args.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (args, ""),
    })
}
