// Copyright (c) 2017-2026 Botorabi
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod actions;
