//! Container manifest generator.
//!
//! Emits a language-appropriate Dockerfile. The planner only schedules this
//! for languages in `plan::CONTAINER_LANGUAGES`; anything else here is a
//! planner/registry mismatch.

use groundwork_core::{
    application::ports::ArtifactGenerator,
    domain::{Artifact, GeneratorId, GeneratorParams, Language},
    error::GroundworkResult,
};

use super::{require_language, unmapped};

pub struct ContainerManifestGenerator;

impl ArtifactGenerator for ContainerManifestGenerator {
    fn id(&self) -> GeneratorId {
        GeneratorId::ContainerManifest
    }

    fn generate(&self, params: &GeneratorParams) -> GroundworkResult<Vec<Artifact>> {
        let language = require_language(self.id(), params)?;
        let content = match language {
            Language::Python => DOCKERFILE_PYTHON,
            Language::Javascript => DOCKERFILE_NODE,
            Language::Typescript => DOCKERFILE_TYPESCRIPT,
            Language::Go => DOCKERFILE_GO,
            Language::Rust => DOCKERFILE_RUST,
            other => {
                return Err(unmapped(
                    self.id(),
                    format!("no container recipe for '{other}'"),
                ));
            }
        };
        Ok(vec![Artifact::file("Dockerfile", content)])
    }
}

const DOCKERFILE_PYTHON: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD ["python", "src/main.py"]
"#;

const DOCKERFILE_NODE: &str = r#"FROM node:18-alpine

WORKDIR /app

COPY package*.json ./
RUN npm ci --only=production

COPY . .

EXPOSE 3000

CMD ["npm", "start"]
"#;

const DOCKERFILE_TYPESCRIPT: &str = r#"FROM node:18-alpine AS builder

WORKDIR /app
COPY package*.json ./
RUN npm ci

COPY . .
RUN npm run build

FROM node:18-alpine
WORKDIR /app

COPY package*.json ./
RUN npm ci --only=production
COPY --from=builder /app/dist ./dist

EXPOSE 3000

CMD ["node", "dist/index.js"]
"#;

const DOCKERFILE_GO: &str = r#"FROM golang:1.21-alpine AS builder

WORKDIR /app
COPY go.mod go.sum ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=0 GOOS=linux go build -o main .

FROM alpine:latest
RUN apk --no-cache add ca-certificates
WORKDIR /root/

COPY --from=builder /app/main .

CMD ["./main"]
"#;

const DOCKERFILE_RUST: &str = r#"FROM rust:1.75-slim AS builder

WORKDIR /app
COPY . .
RUN cargo build --release

FROM debian:bookworm-slim
RUN apt-get update && apt-get install -y ca-certificates && rm -rf /var/lib/apt/lists/*
WORKDIR /app

COPY --from=builder /app/target/release/your-project .

CMD ["./your-project"]
"#;
