use serenity::http::HttpError;

/// HTTP status of a Discord API error, if the request reached Discord.
fn http_status(err: &serenity::Error) -> Option<u16> {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.status_code.as_u16())
        }
        _ => None,
    }
}

/// Whether a Discord API error is an HTTP 403 refusal.
///
/// Raised when a member has direct messages closed or the bot lacks a permission.
pub fn is_forbidden(err: &serenity::Error) -> bool {
    http_status(err) == Some(403)
}

/// Whether a Discord API error is an HTTP 404, e.g. an unknown member.
pub fn is_not_found(err: &serenity::Error) -> bool {
    http_status(err) == Some(404)
}

/// Turns a "not found" lookup failure into `None`, keeping every other error.
///
/// # Returns
/// - `Ok(Some(T))` - Lookup succeeded
/// - `Ok(None)` - Discord answered 404
/// - `Err(serenity::Error)` - Any other failure (rate limit, outage, network)
pub fn absent_on_not_found<T>(
    result: Result<T, serenity::Error>,
) -> Result<Option<T>, serenity::Error> {
    none_if(result, is_not_found)
}

fn none_if<T, E>(result: Result<T, E>, absent: impl Fn(&E) -> bool) -> Result<Option<T>, E> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if absent(&e) => Ok(None),
        Err(e) => Err(e),
    }
}
