use crate::Shape;

/// A shape sent as the input of an EC2 action.
pub trait Ec2Request: Shape {
    /// EC2 action name, e.g. `"CreatePlacementGroup"`.
    const ACTION: &'static str;

    /// Shape the action returns.
    type Response: Shape;
}

/// A request carrying the `DryRun` flag.
///
/// With `DryRun=true` the service checks permissions and parameters without
/// performing the action, answering `DryRunOperation` on success and
/// `UnauthorizedOperation` otherwise.
pub trait DryRunSupported: Ec2Request {
    /// True only when `DryRun` is present and set.
    fn is_dry_run(&self) -> bool;

    /// A copy of this request with `DryRun=true`; `self` is untouched.
    fn dry_run_request(&self) -> Self;
}

/// A request deduplicated by `ClientToken`.
pub trait Idempotent: Ec2Request {
    /// Fills an absent `ClientToken` with a fresh UUID and returns the token
    /// in effect. An existing token is never replaced.
    fn ensure_client_token(&mut self) -> &str;
}

/// Binds a request shape to its action and response shape.
///
/// `dry_run` and `idempotent` opt into the matching traits; the request must
/// declare `dry_run` / `client_token` members respectively.
macro_rules! ec2_request {
    (@dry_run $request:ident) => {
        impl $crate::DryRunSupported for $request {
            fn is_dry_run(&self) -> bool {
                self.dry_run().unwrap_or(false)
            }

            fn dry_run_request(&self) -> Self {
                self.clone().with_dry_run(true)
            }
        }
    };
    (@idempotent $request:ident) => {
        impl $crate::Idempotent for $request {
            fn ensure_client_token(&mut self) -> &str {
                if self.client_token().is_none() {
                    let token = ec2_types::ClientToken::new();
                    tracing::debug!(
                        action = <Self as $crate::Ec2Request>::ACTION,
                        %token,
                        "generated idempotency token"
                    );
                    self.set_client_token(Some(token.into()));
                }
                self.client_token().unwrap_or_default()
            }
        }
    };
    ($request:ident => $response:ident, $action:literal $(, $capability:ident)* $(,)?) => {
        impl $crate::Ec2Request for $request {
            const ACTION: &'static str = $action;
            type Response = $response;
        }

        $( ec2_request!(@$capability $request); )*
    };
}
