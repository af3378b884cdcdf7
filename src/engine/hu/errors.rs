use thiserror::Error;

/// Everything that can sink a replayed action stream. The first failing check
/// terminates the replay; hosts branch on these variants, so the set is part
/// of the channel protocol surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    // Structural
    #[error("action stream is missing the blind prologue")]
    NoBlinds,
    #[error("action stream has {len} actions, above the per-hand cap")]
    TooManyActions { len: usize },
    #[error("expected sequence number {expected}, got {got}")]
    SequenceInvalid { expected: u32, got: u32 },
    #[error("action {seq} does not chain to the previous action's hash")]
    PrevHashInvalid { seq: u32 },
    #[error("unknown action kind code {code}")]
    UnknownAction { code: u8 },
    #[error("blind actions are only valid as the first two actions of a hand")]
    BlindOnlyStart,
    #[error("player is all-in and cannot act")]
    PlayerAllIn,
    #[error("hand already reached a terminal action")]
    HandAlreadyOver,
    #[error("action stream ends before the hand is finished")]
    HandNotDone,

    // Blind prologue
    #[error("small blind must carry sequence number 0")]
    SmallBlindSequenceInvalid,
    #[error("small blind must chain to the hand genesis hash")]
    SmallBlindPrevHashInvalid,
    #[error("first action of a hand must be the small blind")]
    SmallBlindActionInvalid,
    #[error("small blind amount must be at least 1 and within the posting stack")]
    SmallBlindAmountInvalid,
    #[error("big blind must carry sequence number 1")]
    BigBlindSequenceInvalid,
    #[error("big blind must chain to the small blind's hash")]
    BigBlindPrevHashInvalid,
    #[error("second action of a hand must be the big blind")]
    BigBlindActionInvalid,
    #[error("big blind amount must be exactly twice the small blind")]
    BigBlindAmountInvalid,
    #[error("big blind amount exceeds the posting stack")]
    BigBlindStackInvalid,

    // Action semantics
    #[error("fold must carry a zero amount")]
    FoldAmountInvalid,
    #[error("check must carry a zero amount")]
    CheckAmountInvalid,
    #[error("call must carry a zero amount; the engine computes the price")]
    CallAmountInvalid,
    #[error("bet/raise must carry a nonzero amount")]
    RaiseAmountZero,
    #[error("raise does not increase the committed amount past the opponent's")]
    RaiseInsufficientIncrease,
    #[error("raise amount exceeds the actor's remaining stack")]
    RaiseStackInvalid,
    #[error("raise increment is below the minimum for this street")]
    MinimumRaiseNotMet,
    #[error("street raise cap reached")]
    RaiseLimitExceeded,
    #[error("betting is not reopened after a short all-in")]
    NoReopenAllowed,
}

/// Returned by [`HandState::validate_invariants`]; a violation means the
/// state was not produced by this engine.
///
/// [`HandState::validate_invariants`]: crate::engine::hu::state::HandState::validate_invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hand state invariant violated: {0}")]
pub struct InvariantViolation(pub &'static str);
