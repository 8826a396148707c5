//! Explain registry for checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check looks for.
    pub description: &'static str,
    /// How to fix findings.
    pub remediation: &'static str,
    /// Before/after HCL examples.
    pub examples: ExamplePair,
}

/// Before and after HCL examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that would trigger a finding.
    pub before: &'static str,
    /// Configuration that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_SECURITY_OPEN_SSH => Some(explain_open_ssh()),
        ids::CHECK_SECURITY_PUBLIC_BUCKET => Some(explain_public_bucket()),
        ids::CHECK_SECURITY_HARDCODED_SECRET => Some(explain_hardcoded_secret()),
        ids::CHECK_SECURITY_UNENCRYPTED_DATABASE => Some(explain_unencrypted_database()),

        ids::CHECK_COST_OVERSIZED_INSTANCE => Some(explain_oversized_instance()),
        ids::CHECK_COST_UNATTACHED_VOLUME => Some(explain_unattached_volume()),
        ids::CHECK_COST_UNUSED_ELASTIC_IP => Some(explain_unused_elastic_ip()),
        ids::CHECK_COST_IDLE_LOAD_BALANCER => Some(explain_idle_load_balancer()),
        ids::CHECK_COST_UNDERUTILIZED_DATABASE => Some(explain_underutilized_database()),
        ids::CHECK_COST_EXPIRING_CERTIFICATE => Some(explain_expiring_certificate()),
        ids::CHECK_COST_OVERSIZED_VOLUME => Some(explain_oversized_volume()),

        _ => None,
    }
}

/// List all known check IDs in registration order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SECURITY_OPEN_SSH,
        ids::CHECK_SECURITY_PUBLIC_BUCKET,
        ids::CHECK_SECURITY_HARDCODED_SECRET,
        ids::CHECK_SECURITY_UNENCRYPTED_DATABASE,
        ids::CHECK_COST_OVERSIZED_INSTANCE,
        ids::CHECK_COST_UNATTACHED_VOLUME,
        ids::CHECK_COST_UNUSED_ELASTIC_IP,
        ids::CHECK_COST_IDLE_LOAD_BALANCER,
        ids::CHECK_COST_UNDERUTILIZED_DATABASE,
        ids::CHECK_COST_EXPIRING_CERTIFICATE,
        ids::CHECK_COST_OVERSIZED_VOLUME,
    ]
}

// --- Security group ---

fn explain_open_ssh() -> Explanation {
    Explanation {
        title: "Open SSH Access",
        description: "\
Detects security groups with an ingress rule that admits port 22 from 0.0.0.0/0.

Any rule whose port range covers 22 counts, so `from_port = 0, to_port = 65535`
is reported as well. SSH exposed to the whole internet is a constant target for
credential stuffing and exploit scanners.",
        remediation: "\
Restrict the source range to the networks that actually need shell access:
- Use a VPN or bastion CIDR instead of 0.0.0.0/0
- Prefer SSM Session Manager and drop the SSH rule entirely
- Split wide port ranges so 22 is not included by accident",
        examples: ExamplePair {
            before: r#"resource "aws_security_group" "web" {
  ingress {
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }
}"#,
            after: r#"resource "aws_security_group" "web" {
  ingress {
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["10.0.0.0/16"]
  }
}"#,
        },
    }
}

fn explain_public_bucket() -> Explanation {
    Explanation {
        title: "Public S3 Bucket",
        description: "\
Detects S3 buckets whose `acl` grants access beyond the owning account.

The canned ACLs `public-read`, `public-read-write` and `authenticated-read` all
expose objects to principals outside the account.",
        remediation: "\
Set `acl = \"private\"` and serve public content through CloudFront with an
origin access control. Enable the account-level S3 Block Public Access settings.",
        examples: ExamplePair {
            before: r#"resource "aws_s3_bucket" "assets" {
  bucket = "my-assets"
  acl    = "public-read"
}"#,
            after: r#"resource "aws_s3_bucket" "assets" {
  bucket = "my-assets"
  acl    = "private"
}"#,
        },
    }
}

fn explain_hardcoded_secret() -> Explanation {
    Explanation {
        title: "Hardcoded Secret",
        description: "\
Detects credentials written literally into `user_data` or `environment`.

The raw source text of the attribute is matched case-insensitively against
`(password|secret|token|key) = \"...\"`. Interpolations are not resolved, so the
check sees exactly what was committed to the repository.",
        remediation: "\
Move the value into a secret store and reference it at runtime:
- AWS Secrets Manager or SSM Parameter Store
- A sensitive Terraform variable supplied by the pipeline",
        examples: ExamplePair {
            before: r#"resource "aws_instance" "app" {
  user_data = "export DB_PASSWORD = \"hunter2\""
}"#,
            after: r#"resource "aws_instance" "app" {
  user_data = templatefile("init.sh", { secret_arn = aws_secretsmanager_secret.db.arn })
}"#,
        },
    }
}

fn explain_unencrypted_database() -> Explanation {
    Explanation {
        title: "Unencrypted RDS Instance",
        description: "\
Detects RDS instances without storage encryption.

`storage_encrypted` defaults to false, so an instance that omits it stores data,
snapshots and replicas unencrypted.",
        remediation: "\
Set `storage_encrypted = true`, optionally with a customer managed `kms_key_id`.
Existing instances must be migrated through an encrypted snapshot copy.",
        examples: ExamplePair {
            before: r#"resource "aws_db_instance" "main" {
  instance_class = "db.t3.medium"
}"#,
            after: r#"resource "aws_db_instance" "main" {
  instance_class    = "db.t3.medium"
  storage_encrypted = true
}"#,
        },
    }
}

// --- Cost group ---

fn explain_oversized_instance() -> Explanation {
    Explanation {
        title: "Oversized Instance",
        description: "\
Reports EC2 instances whose `instance_type` appears in the configured
downsizing map (`checks.cost.oversized_instances`). The finding names both the
current and the recommended type.",
        remediation: "\
Switch to the recommended type after confirming CPU and memory headroom, or
remove the entry from the map if the size is intentional.",
        examples: ExamplePair {
            before: r#"resource "aws_instance" "worker" {
  instance_type = "t3.large"
}"#,
            after: r#"resource "aws_instance" "worker" {
  instance_type = "t3.medium"
}"#,
        },
    }
}

fn explain_unattached_volume() -> Explanation {
    Explanation {
        title: "Unattached EBS Volume",
        description: "\
Reports EBS volumes declared without an `attachment` attribute. A volume that is
never attached still bills for its provisioned size.",
        remediation: "\
Attach the volume to an instance or delete it. Snapshots are cheaper for data
that must be kept.",
        examples: ExamplePair {
            before: r#"resource "aws_ebs_volume" "data" {
  availability_zone = "us-east-1a"
  size              = 100
}"#,
            after: r#"resource "aws_ebs_volume" "data" {
  availability_zone = "us-east-1a"
  size              = 100
  attachment        = aws_instance.app.id
}"#,
        },
    }
}

fn explain_unused_elastic_ip() -> Explanation {
    Explanation {
        title: "Unused Elastic IP",
        description: "\
Reports Elastic IPs declared without an `instance` attribute. AWS charges for
addresses that are allocated but not associated.",
        remediation: "Associate the address with an instance or release it.",
        examples: ExamplePair {
            before: r#"resource "aws_eip" "nat" {
  domain = "vpc"
}"#,
            after: r#"resource "aws_eip" "nat" {
  domain   = "vpc"
  instance = aws_instance.nat.id
}"#,
        },
    }
}

fn explain_idle_load_balancer() -> Explanation {
    Explanation {
        title: "Idle Load Balancer",
        description: "\
Reports application load balancers with an empty `subnets` list. Such a
balancer cannot route traffic but still accrues hourly charges.",
        remediation: "Attach the balancer to subnets or remove it.",
        examples: ExamplePair {
            before: r#"resource "aws_lb" "api" {
  load_balancer_type = "application"
  subnets            = []
}"#,
            after: r#"resource "aws_lb" "api" {
  load_balancer_type = "application"
  subnets            = ["subnet-1234", "subnet-5678"]
}"#,
        },
    }
}

fn explain_underutilized_database() -> Explanation {
    Explanation {
        title: "Underutilized RDS Instance",
        description: "\
Reports `db.t3.medium` instances with less than 20 GiB of allocated storage.
A workload that small usually fits a smaller class.",
        remediation: "Move to `db.t3.small` or `db.t3.micro`, or consolidate databases.",
        examples: ExamplePair {
            before: r#"resource "aws_db_instance" "reports" {
  instance_class    = "db.t3.medium"
  allocated_storage = 10
}"#,
            after: r#"resource "aws_db_instance" "reports" {
  instance_class    = "db.t3.small"
  allocated_storage = 10
}"#,
        },
    }
}

fn explain_expiring_certificate() -> Explanation {
    Explanation {
        title: "Expiring SSL Certificate",
        description: "\
Reports ACM certificates whose `expiration_days` is below 30.",
        remediation: "\
Renew the certificate or switch to DNS validation so ACM renews it
automatically.",
        examples: ExamplePair {
            before: r#"resource "aws_acm_certificate" "site" {
  domain_name     = "example.com"
  expiration_days = 10
}"#,
            after: r#"resource "aws_acm_certificate" "site" {
  domain_name       = "example.com"
  validation_method = "DNS"
  expiration_days   = 365
}"#,
        },
    }
}

fn explain_oversized_volume() -> Explanation {
    Explanation {
        title: "Oversized EBS Volume",
        description: "\
Reports EBS volumes larger than 1000 GiB. Large provisioned volumes are often
sized for peak growth that never arrives.",
        remediation: "\
Right-size the volume to current usage plus headroom, or move cold data to S3.",
        examples: ExamplePair {
            before: r#"resource "aws_ebs_volume" "archive" {
  size = 4000
}"#,
            after: r#"resource "aws_ebs_volume" "archive" {
  size = 500
}"#,
        },
    }
}
