use std::env;

/// Build-time configuration variables and whether their value is secret
const CONFIG_VARS: [(&str, bool); 7] = [
    ("DEVICE_ID", false),
    ("DEVICE_LOCATION", false),
    ("EXERCISE_VARIANT", false),
    ("WIFI_SSID", false),
    ("WIFI_PASSWORD", true),
    ("STORE_URL", false),
    ("STORE_SECRET", true),
];

fn main() {
    // Node configuration is read from environment variables at build time.
    // Absent variables are exported empty; the node rejects them at startup.
    for (name, secret) in CONFIG_VARS {
        match env::var(name) {
            Ok(value) => {
                println!("cargo:rustc-env={}={}", name, value);
                if secret {
                    println!("cargo:warning=Using {} from environment (hidden)", name);
                } else {
                    println!("cargo:warning=Using {} from environment: {}", name, value);
                }
            }
            Err(_) => println!("cargo:rustc-env={}=", name),
        }

        // Rerun if environment variables change
        println!("cargo:rerun-if-env-changed={}", name);
    }
}
