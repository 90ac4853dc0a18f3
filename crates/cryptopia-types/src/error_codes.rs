//! Cryptopia API error code mapping
//!
//! The exchange reports application-level failures inside an otherwise
//! well-formed JSON response, as a numeric `error_code` member. This module
//! maps the documented codes to their message strings and classifies the
//! handful of codes callers commonly branch on.

/// Look up the documented message for a numeric error code.
///
/// Returns `None` for codes missing from the exchange documentation; use
/// [`describe`] when a message is always required.
pub fn message_for(code: i64) -> Option<&'static str> {
    let message = match code {
        10000 => "Required parameter can not be null",
        10001 => "Requests are too frequent",
        10002 => "System Error",
        10003 => "Restricted list request, please try again later",
        10004 => "IP restriction",
        10005 => "Key does not exist",
        10006 => "User does not exist",
        10007 => "Signatures do not match",
        10008 => "Illegal parameter",
        10009 => "Order does not exist",
        10010 => "Insufficient balance",
        10011 => "Order is less than minimum trade amount",
        10012 => "Unsupported symbol (not btc_usd or ltc_usd)",
        10013 => "This interface only accepts https requests",
        10014 => "Order price must be between 0 and 1,000,000",
        10015 => "Order price differs from current market price too much",
        10016 => "Insufficient coins balance",
        10017 => "API authorization error",
        10026 => "Loan (including reserved loan) and margin cannot be withdrawn",
        10027 => "Cannot withdraw within 24 hrs of authentication information modification",
        10028 => "Withdrawal amount exceeds daily limit",
        10029 => "Account has unpaid loan, please cancel/pay off the loan before withdraw",
        10031 => "Deposits can only be withdrawn after 6 confirmations",
        10032 => "Please enabled phone/google authenticator",
        10033 => "Fee higher than maximum network transaction fee",
        10034 => "Fee lower than minimum network transaction fee",
        10035 => "Insufficient BTC/LTC",
        10036 => "Withdrawal amount too low",
        10037 => "Trade password not set",
        10040 => "Withdrawal cancellation fails",
        10041 => "Withdrawal address not approved",
        10042 => "Admin password error",
        10100 => "User account frozen",
        10216 => "Non-available API",
        // The exchange reuses the HTTP status as an application code here.
        503 => "Too many requests (Http)",
        _ => return None,
    };
    Some(message)
}

/// Resolve an error code to a human-readable message.
///
/// Undocumented codes produce a generated message rather than an empty string,
/// so unknown failures are never silently dropped.
pub fn describe(code: i64) -> String {
    match message_for(code) {
        Some(message) => message.to_string(),
        None => format!("Unknown Cryptopia error code: {}", code),
    }
}

/// Codes that mean the client is being throttled.
pub fn is_rate_limit(code: i64) -> bool {
    matches!(code, 10001 | 503)
}

/// Codes that mean the request's credentials or signature were rejected.
pub fn is_auth_failure(code: i64) -> bool {
    matches!(code, 10005 | 10007 | 10017)
}
