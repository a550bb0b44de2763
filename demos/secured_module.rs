//! Guard pipeline walkthrough.
//!
//! This example shows:
//! 1. Registering guards on a module's before-pipeline at setup time
//! 2. Short-circuiting evaluation per request
//! 3. The ordering guarantee of `require_validated_claims`
//! 4. Validator faults surfacing as errors instead of allow/deny
//!
//! Run with: `cargo run --example secured_module`

use guard_core::{secure, GuardOutcome, Identity, Pipeline, RequestContext};
use url::Url;

fn evaluate(pipeline: &Pipeline, ctx: &RequestContext) {
    match pipeline.evaluate(ctx) {
        Ok(GuardOutcome::Continue) => println!("  -> continue to handler"),
        Ok(GuardOutcome::Terminate(response)) => println!("  -> terminated: {}", response),
        Err(err) => println!("  -> aborted: {}", err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Guard Pipeline Example ===\n");

    // Setup: an admin module requiring https and the "admin" claim.
    let mut admin = Pipeline::new();
    secure::require_https(&mut admin);
    secure::require_claims(&mut admin, ["admin"]);

    println!("--- Scenario 1: admin with the right claim ---");
    let ctx = RequestContext::new(
        Some(Identity::new("alice", ["admin", "user"])),
        Url::parse("https://example.com/admin").unwrap(),
        "GET",
    );
    evaluate(&admin, &ctx);

    println!("\n--- Scenario 2: authenticated but missing the claim ---");
    let ctx = RequestContext::new(
        Some(Identity::new("bob", ["user"])),
        Url::parse("https://example.com/admin").unwrap(),
        "GET",
    );
    evaluate(&admin, &ctx);

    println!("\n--- Scenario 3: anonymous request ---");
    let ctx = RequestContext::new(
        None,
        Url::parse("https://example.com/admin").unwrap(),
        "GET",
    );
    evaluate(&admin, &ctx);

    println!("\n--- Scenario 4: insecure GET is redirected ---");
    let ctx = RequestContext::new(
        Some(Identity::new("alice", ["admin"])),
        Url::parse("http://example.com/admin").unwrap(),
        "GET",
    );
    evaluate(&admin, &ctx);

    println!("\n--- Scenario 5: insecure POST is refused ---");
    let ctx = RequestContext::new(
        Some(Identity::new("alice", ["admin"])),
        Url::parse("http://example.com/admin").unwrap(),
        "POST",
    );
    evaluate(&admin, &ctx);

    // Setup: a module whose claims are checked by an external validator.
    // require_validated_claims prepends, so the authentication/validator
    // pair runs before anything registered earlier.
    let mut vetted = Pipeline::new();
    secure::require_https(&mut vetted);
    secure::require_validated_claims(&mut vetted, |claims| Ok(claims.contains("vetted")));

    println!("\n--- Scenario 6: external validator accepts ---");
    let ctx = RequestContext::new(
        Some(Identity::new("carol", ["vetted"])),
        Url::parse("https://example.com/reports").unwrap(),
        "GET",
    );
    evaluate(&vetted, &ctx);

    // Setup: a validator that fails (e.g. claims backend offline).
    let mut faulty = Pipeline::new();
    secure::require_validated_claims(&mut faulty, |_| Err("claims backend offline".into()));

    println!("\n--- Scenario 7: validator fault aborts the request ---");
    let ctx = RequestContext::new(
        Some(Identity::new("carol", ["vetted"])),
        Url::parse("https://example.com/reports").unwrap(),
        "GET",
    );
    evaluate(&faulty, &ctx);

    println!("\n=== Key Takeaways ===");
    println!("1. Guards are registered once, at setup time");
    println!("2. Evaluation is ordered and short-circuits on the first denial");
    println!("3. Authentication always precedes claim checks");
    println!("4. Validator faults are surfaced, never treated as allow or deny");
}
