//! Dispatch Tests
//!
//! Tests verify:
//! - Pattern matching and the `!` prefix gate
//! - First-match-wins routing
//! - Fresh argument lists per dispatch
//! - Separator override
//! - Typed argument accessors and their errors

use qrcon::{Args, CommandRegistry, RconError, Result};

// =============================================================================
// Test Helpers
// =============================================================================

/// Context recording every handler invocation
#[derive(Default)]
struct Recorded {
    calls: Vec<(String, u8, Args)>,
}

fn recording_registry(
    verb: &str,
    require_prefix: bool,
    label: &str,
) -> CommandRegistry<Recorded> {
    let mut registry = CommandRegistry::new();
    let label = label.to_string();
    registry
        .register(verb, require_prefix, move |slot, args, context: &mut Recorded| {
            context.calls.push((label.clone(), slot, args.clone()));
            Ok(())
        })
        .unwrap();
    registry
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test]
fn test_matches_prefixed_message() {
    let registry = recording_registry("kick", false, "kick");
    let mut context = Recorded::default();

    assert!(registry.dispatch(4, "!kick 3", &mut context));
    assert_eq!(context.calls.len(), 1);
    assert_eq!(context.calls[0].1, 4);
    assert_eq!(context.calls[0].2.get(0).unwrap(), "3");
}

#[test]
fn test_matches_bare_message_when_prefix_optional() {
    let registry = recording_registry("kick", false, "kick");
    let mut context = Recorded::default();

    assert!(registry.dispatch(4, "kick 3", &mut context));
}

#[test]
fn test_prefix_required_rejects_bare_message() {
    let registry = recording_registry("kick", true, "kick");
    let mut context = Recorded::default();

    assert!(!registry.dispatch(4, "kick 3", &mut context));
    assert!(context.calls.is_empty());
}

#[test]
fn test_prefix_required_accepts_prefixed_message() {
    let registry = recording_registry("kick", true, "kick");
    let mut context = Recorded::default();

    assert!(registry.dispatch(4, "!kick 3", &mut context));
}

#[test]
fn test_unmatched_message_returns_false() {
    let registry = recording_registry("kick", false, "kick");
    let mut context = Recorded::default();

    assert!(!registry.dispatch(4, "!ban 3", &mut context));
    assert!(context.calls.is_empty());
}

#[test]
fn test_message_without_arguments() {
    let registry = recording_registry("newround", false, "newround");
    let mut context = Recorded::default();

    assert!(registry.dispatch(0, "!newround", &mut context));
    assert!(context.calls[0].2.is_empty());
}

#[test]
fn test_verb_alternation() {
    let registry = recording_registry("(?:kick|k)", false, "kick");
    let mut context = Recorded::default();

    assert!(registry.dispatch(0, "!k 2", &mut context));
    assert!(registry.dispatch(0, "!kick 2", &mut context));
    assert_eq!(context.calls.len(), 2);
}

#[test]
fn test_first_match_wins() {
    let mut registry = CommandRegistry::new();
    registry
        .register("kick", false, |_, _, context: &mut Vec<&str>| {
            context.push("first");
            Ok(())
        })
        .unwrap();
    registry
        .register("kick", false, |_, _, context: &mut Vec<&str>| {
            context.push("second");
            Ok(())
        })
        .unwrap();

    let mut context = Vec::new();
    assert!(registry.dispatch(0, "!kick 1", &mut context));
    assert_eq!(context, vec!["first"]);
}

#[test]
fn test_handler_error_still_counts_as_handled() {
    let mut registry = CommandRegistry::new();
    registry
        .register("kick", false, |_, args, _: &mut ()| {
            args.get_u8(0)?;
            Ok(())
        })
        .unwrap();

    // "nine" fails u8 parsing inside the handler
    assert!(registry.dispatch(0, "!kick nine", &mut ()));
}

// =============================================================================
// Argument Tests
// =============================================================================

#[test]
fn test_arguments_are_fresh_per_dispatch() {
    let registry = recording_registry("tell", false, "tell");
    let mut context = Recorded::default();

    registry.dispatch(0, "!tell 3 hello there", &mut context);
    registry.dispatch(0, "!tell 7", &mut context);

    assert_eq!(context.calls[0].2.len(), 3);
    assert_eq!(context.calls[1].2.len(), 1);
    assert_eq!(context.calls[1].2.get(0).unwrap(), "7");
}

#[test]
fn test_custom_separator() {
    let mut registry = CommandRegistry::new();
    registry
        .register_with_separator("tell", false, ',', |_, args, context: &mut Vec<String>| {
            context.push(args.get(0)?.to_string());
            context.push(args.get(1)?.to_string());
            Ok(())
        })
        .unwrap();

    let mut context = Vec::new();
    assert!(registry.dispatch(0, "!tell 3,hello there", &mut context));
    assert_eq!(context, vec!["3".to_string(), "hello there".to_string()]);
}

#[test]
fn test_typed_accessors() {
    let mut seen: Option<Args> = None;
    let mut registry = CommandRegistry::new();
    registry
        .register("mode", false, |_, args, context: &mut Option<Args>| {
            *context = Some(args.clone());
            Ok(())
        })
        .unwrap();

    registry.dispatch(0, "!mode 3 extra", &mut seen);
    let args = seen.unwrap();

    assert_eq!(args.get(0).unwrap(), "3");
    assert_eq!(args.get_u8(0).unwrap(), 3);
    assert_eq!(args.get_or(1, "fallback"), "extra");
    assert_eq!(args.get_or(9, "fallback"), "fallback");
    assert_eq!(args.get_u8_or(9, 11).unwrap(), 11);
}

#[test]
fn test_missing_argument_error() {
    let mut seen: Option<Args> = None;
    let mut registry = CommandRegistry::new();
    registry
        .register("kick", false, |_, args, context: &mut Option<Args>| {
            *context = Some(args.clone());
            Ok(())
        })
        .unwrap();

    registry.dispatch(0, "!kick", &mut seen);
    let args = seen.unwrap();

    assert!(matches!(args.get(0), Err(RconError::MissingArgument(0))));
    assert!(matches!(args.get_u8(2), Err(RconError::MissingArgument(2))));
}

#[test]
fn test_invalid_argument_error() {
    let mut seen: Option<Args> = None;
    let mut registry = CommandRegistry::new();
    registry
        .register("kick", false, |_, args, context: &mut Option<Args>| {
            *context = Some(args.clone());
            Ok(())
        })
        .unwrap();

    registry.dispatch(0, "!kick nine", &mut seen);
    let args = seen.unwrap();

    assert!(matches!(
        args.get_u8(0),
        Err(RconError::InvalidArgument { index: 0, .. })
    ));
    // A present-but-unparsable value is invalid even with a fallback
    assert!(args.get_u8_or(0, 1).is_err());
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn test_invalid_pattern_rejected() {
    let mut registry: CommandRegistry<()> = CommandRegistry::new();

    let result: Result<()> = registry.register("(unclosed", false, |_, _, _| Ok(()));
    assert!(matches!(result, Err(RconError::Pattern(_))));
}

#[test]
fn test_registry_len() {
    let mut registry: CommandRegistry<()> = CommandRegistry::new();
    assert!(registry.is_empty());

    registry.register("kick", false, |_, _, _| Ok(())).unwrap();
    registry.register("ban", true, |_, _, _| Ok(())).unwrap();

    assert_eq!(registry.len(), 2);
}
