use crate::*;

fn print_dtc_report(entries: &[CodeLookup]) {
    for entry in entries {
        let info = entry.info();
        println!("Code: {}", info.code);
        println!("Title: {}", info.title);
        println!("System: {}", info.system);
        println!("Severity: {}", info.severity);
        if !entry.is_known() {
            println!("Source: inferred from code pattern (not in local knowledge base)");
        }
        print_list("Likely causes:", &info.likely_causes);
        print_list("Recommended steps:", &info.recommended_steps);
        println!();
    }
}

fn print_change_plan(plan: &ChangePlan) {
    println!("Module: {}", plan.module);
    println!("Parameter: {}", plan.parameter);
    println!(
        "Current -> Target: {} -> {}",
        plan.current_value, plan.target_value
    );
    println!("Safety level: {}", plan.safety_tier);
    print_list("\nPre-checks:", &plan.pre_checks);
    print_list("\nExecution steps:", &plan.execution_steps);
    print_list("\nRollback steps:", &plan.rollback_steps);
    print_list("\nWarnings:", &plan.warnings);
}

fn print_trust_report(report: &TrustReport) {
    println!("Legitimacy score: {}/100", report.legitimacy_score);
    println!("Verdict: {}", report.verdict);
    print_list("\nStrengths:", &report.strengths);
    print_list("\nCaveats:", &report.caveats);
    println!("\nSources:");
    for s in &report.sources {
        println!(
            "- [{}] {}: {} (checked {})",
            s.category, s.title, s.url, s.last_checked
        );
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn print_topic_explanation(explanation: &TopicExplanation) {
    println!("Topic: {}", explanation.topic);
    println!("Summary: {}", explanation.summary);
    print_list("\nWhy it matters:", &lines(explanation.why_it_matters));
    print_list("\nCommon mistakes:", &lines(explanation.common_mistakes));
    print_list("\nBest practices:", &lines(explanation.best_practices));
}

pub fn handle_advisory_commands(cli: &Cli, config: &AppConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::DecodeDtc { codes } => {
            let entries = codes
                .iter()
                .map(|c| decode_dtc(c))
                .collect::<Result<Vec<_>, _>>()?;
            print_with(cli.json, entries, |e| print_dtc_report(e))?;
        }
        Commands::PlanChange {
            module,
            parameter,
            current,
            target,
        } => {
            let planner = ChangePlanner::new(&config.safety_critical_modules);
            let plan = planner.plan(module, parameter, current, target);
            print_with(cli.json, plan, print_change_plan)?;
        }
        Commands::TrustReport { out } => {
            let report = build_trust_report();
            if let Some(p) = out {
                std::fs::write(p, serde_json::to_string_pretty(&report)?)
                    .map_err(|e| HelperError::io(p, e))?;
                log::info!("wrote trust report to {}", p.display());
            }
            print_with(cli.json, report, |r| {
                print_trust_report(r);
                if let Some(p) = out {
                    println!("JSON output: {}", p.display());
                }
            })?;
        }
        Commands::Explain {
            topics,
            list_topics: list_only,
        } => {
            if *list_only {
                let keys = list_topics();
                print_with(cli.json, keys, |k| {
                    println!("Supported topics:");
                    for t in k {
                        println!("- {t}");
                    }
                })?;
                return Ok(true);
            }
            let explanations = topics
                .iter()
                .map(|t| get_topic_explanation(t))
                .collect::<Result<Vec<_>, _>>()?;
            print_with(cli.json, explanations, |all| {
                for (idx, explanation) in all.iter().enumerate() {
                    print_topic_explanation(explanation);
                    if idx + 1 < all.len() {
                        println!("\n{}\n", "=".repeat(72));
                    }
                }
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
