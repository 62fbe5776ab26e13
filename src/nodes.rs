use crate::{
    common::error::{ListNodes, Result},
    kube_client,
};
use k8s_openapi::api::core::v1::Node;
use kube::{api::ListParams, ResourceExt};
use snafu::ResultExt;

/// List all cluster nodes in a single call, in API-returned order. No label or field
/// selectors, and no paging, clusters big enough to need it are not this tool's audience.
pub async fn list_nodes() -> Result<Vec<Node>> {
    let nodes = kube_client::nodes_api()
        .await?
        .list(&ListParams::default())
        .await
        .context(ListNodes)?;

    Ok(nodes.items)
}

/// One report line per node, name and kubelet version.
pub fn node_line(node: &Node) -> String {
    let kubelet_version = node
        .status
        .as_ref()
        .and_then(|status| status.node_info.as_ref())
        .map(|info| info.kubelet_version.as_str())
        .unwrap_or_default();

    format!("Name: {}, Version: {}", node.name_any(), kubelet_version)
}

/// The full diagnostic report: a header carrying the raw node-name list (rather than a
/// dump of the whole NodeList object), then one line per node in input order.
pub fn report_lines(nodes: &[Node]) -> Vec<String> {
    let names: Vec<String> = nodes.iter().map(ResourceExt::name_any).collect();

    let mut lines = Vec::with_capacity(nodes.len() + 1);
    lines.push(format!("Cluster nodes:\n\t{names:?}"));
    lines.extend(nodes.iter().map(node_line));

    lines
}

/// The cluster nodes diagnostic: print the report for every node the cluster has.
pub async fn report_nodes() -> Result<()> {
    let nodes = list_nodes().await?;

    for line in report_lines(nodes.as_slice()) {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{node_line, report_lines};
    use k8s_openapi::api::core::v1::{Node, NodeStatus, NodeSystemInfo};
    use kube::core::ObjectMeta;

    fn node(name: &str, kubelet_version: &str) -> Node {
        Node {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            status: Some(NodeStatus {
                node_info: Some(NodeSystemInfo {
                    kubelet_version: kubelet_version.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn node_line_carries_name_and_kubelet_version() {
        let line = node_line(&node("worker-0", "v1.20.15"));
        assert_eq!(line, "Name: worker-0, Version: v1.20.15");
    }

    #[test]
    fn node_line_survives_a_node_without_status() {
        let line = node_line(&Node::default());
        assert_eq!(line, "Name: , Version: ");
    }

    #[test]
    fn report_for_an_empty_cluster_is_header_only() {
        let lines = report_lines(&[]);
        assert_eq!(lines, vec!["Cluster nodes:\n\t[]".to_string()]);
    }

    #[test]
    fn report_has_one_line_per_node_in_input_order() {
        let nodes = vec![node("worker-1", "v1.20.15"), node("worker-0", "v1.20.14")];

        let lines = report_lines(nodes.as_slice());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Cluster nodes:\n\t[\"worker-1\", \"worker-0\"]");
        assert_eq!(lines[1], "Name: worker-1, Version: v1.20.15");
        assert_eq!(lines[2], "Name: worker-0, Version: v1.20.14");
    }
}
