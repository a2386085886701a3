// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo package for the Corkboard workspace. See the `examples/` directory.
