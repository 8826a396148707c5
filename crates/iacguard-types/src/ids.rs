//! Stable identifiers for checks and the resource kinds they target.
//!
//! `check_id` is a dotted namespace: `<group>.<name>`.

// Checks: security group
pub const CHECK_SECURITY_OPEN_SSH: &str = "security.open_ssh";
pub const CHECK_SECURITY_PUBLIC_BUCKET: &str = "security.public_bucket";
pub const CHECK_SECURITY_HARDCODED_SECRET: &str = "security.hardcoded_secret";
pub const CHECK_SECURITY_UNENCRYPTED_DATABASE: &str = "security.unencrypted_database";

// Checks: cost group
pub const CHECK_COST_OVERSIZED_INSTANCE: &str = "cost.oversized_instance";
pub const CHECK_COST_UNATTACHED_VOLUME: &str = "cost.unattached_volume";
pub const CHECK_COST_UNUSED_ELASTIC_IP: &str = "cost.unused_elastic_ip";
pub const CHECK_COST_IDLE_LOAD_BALANCER: &str = "cost.idle_load_balancer";
pub const CHECK_COST_UNDERUTILIZED_DATABASE: &str = "cost.underutilized_database";
pub const CHECK_COST_EXPIRING_CERTIFICATE: &str = "cost.expiring_certificate";
pub const CHECK_COST_OVERSIZED_VOLUME: &str = "cost.oversized_volume";

// Resource kinds (Terraform AWS provider types)
pub const KIND_SECURITY_GROUP: &str = "aws_security_group";
pub const KIND_S3_BUCKET: &str = "aws_s3_bucket";
pub const KIND_INSTANCE: &str = "aws_instance";
pub const KIND_EBS_VOLUME: &str = "aws_ebs_volume";
pub const KIND_EIP: &str = "aws_eip";
pub const KIND_LOAD_BALANCER: &str = "aws_lb";
pub const KIND_DB_INSTANCE: &str = "aws_db_instance";
pub const KIND_ACM_CERTIFICATE: &str = "aws_acm_certificate";
