/// Fixed-point scaling factor for the reward-per-share accumulator.
///
/// Per-share values are multiplied by this constant before storage so that
/// dividing an injection across a large pool keeps 18 decimal places of
/// precision without floating-point arithmetic.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Advance the reward-per-share accumulator by one injection.
///
/// ```text
/// Δacc = amount × PRECISION / total_deposited
/// new_acc = acc + Δacc
/// ```
///
/// Returns `None` when `total_deposited` is zero (there is nobody to credit)
/// or when any step overflows `u128`.
pub fn accumulate(acc: u128, amount: u128, total_deposited: u128) -> Option<u128> {
    if total_deposited == 0 {
        return None;
    }

    let delta = amount.checked_mul(PRECISION)? / total_deposited;
    acc.checked_add(delta)
}

/// Scaled reward earned by `principal` while the accumulator moved from
/// `reward_debt` to `acc`.
///
/// ```text
/// scaled = principal × (acc − reward_debt)
/// ```
///
/// The result is still multiplied by `PRECISION`; nothing is truncated here.
/// Returns `None` if the snapshot is ahead of the accumulator (a corrupted
/// position) or on overflow.
pub fn settle(principal: u128, acc: u128, reward_debt: u128) -> Option<u128> {
    let delta = acc.checked_sub(reward_debt)?;
    principal.checked_mul(delta)
}

/// Whether `outstanding` whole units of reward can still be held in scaled
/// form without overflowing `u128`.
pub fn settleable(outstanding: u128) -> bool {
    outstanding.checked_mul(PRECISION).is_some()
}

/// Convert a scaled reward into whole token units, flooring the remainder.
///
/// This is the single point where fractional reward is discarded; the
/// remainder stays in the pool as dust.
pub fn truncate(scaled: u128) -> u128 {
    scaled / PRECISION
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
