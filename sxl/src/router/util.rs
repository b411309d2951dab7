use sxl_core::SxlError;

/// Drive two fallible futures together and merge their outcomes.
///
/// Both futures always run to completion. When both fail, the error of `a`
/// wins so the reported failure matches what a sequential `a` then `b` run
/// would have produced.
pub async fn join_pair<A, B, Fa, Fb>(a: Fa, b: Fb) -> Result<(A, B), SxlError>
where
    Fa: core::future::Future<Output = Result<A, SxlError>>,
    Fb: core::future::Future<Output = Result<B, SxlError>>,
{
    let (ra, rb) = futures::future::join(a, b).await;
    Ok((ra?, rb?))
}
