use contracts::domain::a001_organ_unit::OrganUnitDraft;

/// Hands one validated draft to the external collaborator. Here that
/// collaborator is the browser console; a production deployment swaps this
/// function for the persistence call.
pub fn register(draft: &OrganUnitDraft) -> Result<(), String> {
    let payload = serde_json::to_string(draft).map_err(|e| format!("{e}"))?;
    log::info!("Datos enviados: {}", payload);
    Ok(())
}
