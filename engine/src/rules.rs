use crate::player::Action;

/// Outcome of normalizing a submitted betting action against the table
/// state. Malformed input maps onto the nearest legal action instead of an
/// error, so a careless strategy or human can never wedge a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Fold,
    /// Check while chips were owed; normalized to a fold.
    FoldInvalidCheck,
    Check,
    Call { pay: u32 },
    /// Raise that could not legally stand; normalized to a call.
    CallReduced { pay: u32 },
    Raise { total: u32, pay: u32 },
}

/// Normalizes a betting action for the seat about to act.
///
/// A raise is expressed as the *total* the actor wants committed this
/// phase. The resolution clamps it to the stack (all-in), downgrades
/// under-sized raises from stacks that could have afforded the legal
/// minimum, and converts raises that cannot beat the table bet into
/// (possibly all-in) calls. A `Raise` resolution therefore always carries a
/// total strictly above `current_bet`.
///
/// # Arguments
///
/// * `action` - The action as submitted
/// * `committed` - Chips this seat has already put in this phase
/// * `stack` - The seat's remaining chips
/// * `current_bet` - The table bet every active seat must match
/// * `min_raise` - The current raise increment on top of `current_bet`
///
/// # Examples
///
/// ```
/// use fivedraw_engine::player::Action;
/// use fivedraw_engine::rules::{resolve_action, Resolution};
///
/// // Calling covers what is owed, capped at the stack.
/// let r = resolve_action(Action::Call, 0, 1000, 50, 50);
/// assert_eq!(r, Resolution::Call { pay: 50 });
///
/// // A raise beyond the stack clamps to an all-in total.
/// let r = resolve_action(Action::Raise(5000), 0, 500, 50, 50);
/// assert_eq!(r, Resolution::Raise { total: 500, pay: 500 });
/// ```
///
/// ```
/// use fivedraw_engine::player::Action;
/// use fivedraw_engine::rules::{resolve_action, Resolution};
///
/// // Raise to 40 against a 50 bet with a 25 minimum: the stack could have
/// // covered the legal 75, so the raise is reduced to a call.
/// let r = resolve_action(Action::Raise(40), 0, 200, 50, 25);
/// assert_eq!(r, Resolution::CallReduced { pay: 50 });
///
/// // Checking while owing chips becomes a fold, not an error.
/// let r = resolve_action(Action::Check, 0, 1000, 50, 25);
/// assert_eq!(r, Resolution::FoldInvalidCheck);
/// ```
pub fn resolve_action(
    action: Action,
    committed: u32,
    stack: u32,
    current_bet: u32,
    min_raise: u32,
) -> Resolution {
    let to_call = current_bet.saturating_sub(committed);
    match action {
        Action::Fold => Resolution::Fold,
        Action::Check => {
            if to_call == 0 {
                Resolution::Check
            } else {
                Resolution::FoldInvalidCheck
            }
        }
        Action::Call => Resolution::Call {
            pay: to_call.min(stack),
        },
        Action::Raise(requested) => {
            let all_in_total = committed.saturating_add(stack);
            let total = requested.min(all_in_total);
            let legal_min = current_bet.saturating_add(min_raise);
            if total < legal_min && all_in_total >= legal_min {
                // under-sized raise from a stack that could afford the
                // legal minimum
                Resolution::CallReduced {
                    pay: to_call.min(stack),
                }
            } else if total <= current_bet {
                // cannot beat the table bet; the chips go in as a call,
                // all-in when the stack is short
                Resolution::CallReduced {
                    pay: to_call.min(stack),
                }
            } else {
                Resolution::Raise {
                    total,
                    pay: total.saturating_sub(committed),
                }
            }
        }
    }
}
