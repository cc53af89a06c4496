//! # CRD Generator
//!
//! Prints the `DBCluster` CustomResourceDefinition as YAML.
//!
//! ```bash
//! cargo run --bin crdgen > config/crd/dbcluster.yaml
//! ```

use dbcluster_controller::crd::DBCluster;
use kube::core::CustomResourceExt;

fn main() {
    let crd = DBCluster::crd();

    match serde_yaml::to_string(&crd) {
        Ok(yaml) => {
            print!("{yaml}");
        }
        Err(e) => {
            eprintln!("Failed to serialize CRD to YAML: {e}");
            std::process::exit(1);
        }
    }
}
