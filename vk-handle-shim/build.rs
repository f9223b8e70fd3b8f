use std::env;

#[allow(dead_code)]
#[path = "src/target.rs"]
mod target;

use target::{HandleRepr, TargetCfg, TargetSignals};

fn main() {
    println!("cargo:rerun-if-changed=src/target.rs");
    println!("cargo:rerun-if-env-changed={}", target::OVERRIDE_VAR);
    println!("cargo:rustc-check-cfg=cfg({})", target::POINTER_CFG);

    // Build scripts run on the host; the `CARGO_CFG_*` variables describe the target.
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap();
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH")
        .unwrap()
        .parse::<u32>()
        .unwrap();

    let signals = TargetSignals::from_cfg(&TargetCfg {
        arch: &arch,
        os: &os,
        env: &target_env,
        pointer_width,
    });
    let detected = target::detect(None, &signals);

    let override_repr = match env::var(target::OVERRIDE_VAR) {
        Ok(value) => match target::parse_override(&value) {
            Ok(repr) => Some(repr),
            Err(err) => panic!("{}", err),
        },
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(value)) => {
            panic!("`{}` is not valid unicode: {:?}", target::OVERRIDE_VAR, value)
        }
    };

    if let Some(repr) = override_repr {
        if repr != detected {
            println!(
                "cargo:warning={}={} selects {} handles, but {} handles were detected for {}; \
                 the linked Vulkan driver must use the same representation",
                target::OVERRIDE_VAR,
                repr.ptr_defines(),
                repr,
                detected,
                arch,
            );
        }
    }

    if target::detect(override_repr, &signals) == HandleRepr::Pointer {
        println!("cargo:rustc-cfg={}", target::POINTER_CFG);
    }
}
