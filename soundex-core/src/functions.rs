//! Named Soundex functions over JSON values.
//!
//! Follows the builtin-call convention: `Ok(None)` for an unknown name,
//! JSON `null`, a missing argument or a non-string argument is an absent name.

use serde_json::Value;

use crate::encoder::Encoder;
use crate::error::{SoundexError, SoundexResult};

/// Call a soundex function by name with the default encoder.
pub fn call(name: &str, args: &[Value]) -> SoundexResult<Option<Value>> {
    call_with(&Encoder::default(), name, args)
}

/// Call a soundex function by name. Returns None if function not found.
pub fn call_with(
    encoder: &Encoder,
    name: &str,
    args: &[Value],
) -> SoundexResult<Option<Value>> {
    let result = match name.to_uppercase().as_str() {
        "SOUNDEX" => {
            check_arity("SOUNDEX", args, 1)?;
            let code = encoder.encode(arg_str(args, 0));
            Some(Value::String(code.to_string()))
        }

        "SOUNDS_LIKE" => {
            check_arity("SOUNDS_LIKE", args, 2)?;
            let alike = encoder.sounds_like(arg_str(args, 0), arg_str(args, 1));
            Some(Value::Bool(alike))
        }

        "SOUNDEX_DIFFERENCE" => {
            check_arity("SOUNDEX_DIFFERENCE", args, 2)?;
            let diff = encoder.difference(arg_str(args, 0), arg_str(args, 1));
            Some(Value::Number(serde_json::Number::from(diff)))
        }

        _ => None,
    };

    Ok(result)
}

fn arg_str(args: &[Value], idx: usize) -> Option<&str> {
    args.get(idx).and_then(|v| v.as_str())
}

fn check_arity(name: &str, args: &[Value], max: usize) -> SoundexResult<()> {
    if args.len() > max {
        return Err(SoundexError::InvalidArguments(format!(
            "{} takes at most {} argument(s), got {}",
            name,
            max,
            args.len()
        )));
    }
    Ok(())
}
