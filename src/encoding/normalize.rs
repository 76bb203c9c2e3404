use crate::encoding::move_mask::LegalMoveMask;
use crate::encoding::policy::check_policy_length;
use crate::error::Result;

/// Softmax of the raw policy restricted to legal moves.
///
/// Illegal entries come out as zero. If the mask marks no legal move the result is all
/// zeros rather than NaN.
pub fn masked_softmax(raw_policy: &[f32], mask: &LegalMoveMask) -> Result<Vec<f32>> {
    check_policy_length(raw_policy)?;

    let legal = mask.as_slice();
    let max_logit = raw_policy
        .iter()
        .zip(legal)
        .filter(|&(_, &bit)| bit == 1)
        .map(|(&logit, _)| logit)
        .fold(f32::NEG_INFINITY, f32::max);
    if max_logit == f32::NEG_INFINITY {
        return Ok(vec![0.; raw_policy.len()]);
    }

    let mut probabilities: Vec<f32> = raw_policy
        .iter()
        .zip(legal)
        .map(|(&logit, &bit)| if bit == 1 { (logit - max_logit).exp() } else { 0. })
        .collect();
    let sum: f32 = probabilities.iter().sum();
    probabilities.iter_mut().for_each(|p| *p /= sum);
    Ok(probabilities)
}

/// Softmax over an already decoded list of per-move values.
pub fn softmax(values: &[f32]) -> Vec<f32> {
    let max_value = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = values.iter().map(|&v| (v - max_value).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
